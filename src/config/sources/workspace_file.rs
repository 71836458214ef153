//! Workspace file source: optional `cinedex.toml` in the workspace root.

use crate::config::CONFIG_FILE_NAME;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workspace_root.join(CONFIG_FILE_NAME);
    Ok(builder.add_source(File::from(path).required(false)))
}
