//! Configuration
//!
//! Layered configuration: built-in defaults, an optional `cinedex.toml` in the
//! workspace (or an explicit file), then `CINEDEX__*` environment variables.

mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::catalog;
use crate::logging::LoggingConfig;
use crate::resource::Resource;
use crate::review::InMemoryReviews;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the workspace configuration file
pub const CONFIG_FILE_NAME: &str = "cinedex.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CinedexConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where catalog and review data are read from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Movie JSON file; None means the bundled list
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Review JSON file; None means the bundled list
    #[serde(default)]
    pub reviews_file: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn movies_source(&self) -> Resource {
        match &self.data_file {
            Some(path) => Resource::File(path.clone()),
            None => catalog::source::bundled(),
        }
    }

    pub fn reviews_source(&self) -> Resource {
        match &self.reviews_file {
            Some(path) => Resource::File(path.clone()),
            None => InMemoryReviews::bundled_source(),
        }
    }
}
