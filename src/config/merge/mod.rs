//! Merge policy and service for layered configuration.

pub mod service;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

/// Builder seeded with values that differ from the serde defaults.
///
/// Command output goes to stdout, so logs default to stderr.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("logging.output", "stderr")?
        .set_default("logging.level", "warn")
}
