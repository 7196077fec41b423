mod credentials;
mod loader;
mod types;
mod validate;

pub use credentials::{load_credentials, EmailCredentials};
pub use loader::{load_config, ENV_PREFIX};
pub use types::*;
pub use validate::validate_config;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("Missing required environment variable: {0}")]
    MissingCredential(&'static str),
}
