//! Environment variable source: CINEDEX__* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses CINEDEX prefix and __ as separator for nested keys, e.g.
/// `CINEDEX__CATALOG__DATA_FILE`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("CINEDEX")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
