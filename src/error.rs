//! Error types for catalog loading and the presentation layer.

use crate::types::MovieId;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading or parsing a catalog or review resource.
///
/// Only surfaced by the fallible `try_load` entry points; `load` recovers from
/// it with an empty result and a log line.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed resource: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors reported to callers of the command-line front end.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Movie with ID {0} was not found")]
    MovieNotFound(MovieId),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
