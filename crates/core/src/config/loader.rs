use figment::{providers::Env, Figment};

use super::{types::Config, ConfigError};

/// Prefix of the environment variables read into [`Config`].
///
/// Sections are separated by a double underscore, e.g.
/// `HOUSING_WATCH_SMTP__PORT=465`.
pub const ENV_PREFIX: &str = "HOUSING_WATCH_";

/// Load configuration from the environment, falling back to defaults
pub fn load_config() -> Result<Config, ConfigError> {
    let config: Config = Figment::new()
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}
