use url::Url;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Target URL parses and is http(s); base URL parses when set
/// - Fetch and SMTP timeouts are not 0
/// - Item selector is not empty
/// - SMTP host is set and port is not 0
///
/// Selector syntax is checked when the parser is built.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Target validation
    let target = Url::parse(&config.target.url).map_err(|e| {
        ConfigError::ValidationError(format!(
            "target.url '{}' is not a valid URL: {}",
            config.target.url, e
        ))
    })?;
    if !matches!(target.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError(format!(
            "target.url must be http or https, got '{}'",
            target.scheme()
        )));
    }
    if let Some(base) = &config.target.base_url {
        Url::parse(base).map_err(|e| {
            ConfigError::ValidationError(format!(
                "target.base_url '{}' is not a valid URL: {}",
                base, e
            ))
        })?;
    }
    if config.target.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "target.timeout_secs cannot be 0".to_string(),
        ));
    }

    // Parser validation
    if config.parser.item_selector.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "parser.item_selector cannot be empty".to_string(),
        ));
    }

    // SMTP validation
    if config.smtp.host.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "smtp.host cannot be empty".to_string(),
        ));
    }
    if config.smtp.port == Some(0) {
        return Err(ConfigError::ValidationError(
            "smtp.port cannot be 0".to_string(),
        ));
    }
    if config.smtp.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "smtp.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
