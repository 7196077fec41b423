//! SMTP credentials, read straight from the process environment.

use std::fmt;

use super::ConfigError;

const SENDER_VAR: &str = "EMAIL_SENDER";
const PASSWORD_VAR: &str = "EMAIL_PASSWORD";
const RECEIVER_VAR: &str = "EMAIL_RECEIVER";

/// Login and addressing for the notification email.
#[derive(Clone)]
pub struct EmailCredentials {
    /// Sender address, also the SMTP login.
    pub sender: String,
    /// Sender (app) password.
    pub password: String,
    /// Recipient address; `None` sends the mail to the sender.
    pub recipient: Option<String>,
}

impl EmailCredentials {
    /// Address the notification goes to.
    pub fn recipient(&self) -> &str {
        self.recipient.as_deref().unwrap_or(&self.sender)
    }
}

// Password stays out of logs
impl fmt::Debug for EmailCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailCredentials")
            .field("sender", &self.sender)
            .field("password_configured", &!self.password.is_empty())
            .field("recipient", &self.recipient)
            .finish()
    }
}

/// Read `EMAIL_SENDER`, `EMAIL_PASSWORD` and the optional `EMAIL_RECEIVER`.
///
/// Unset and blank variables are treated the same. Addresses are trimmed;
/// the password is kept byte for byte.
pub fn load_credentials() -> Result<EmailCredentials, ConfigError> {
    Ok(EmailCredentials {
        sender: require(SENDER_VAR)?.trim().to_string(),
        password: require(PASSWORD_VAR)?,
        recipient: optional(RECEIVER_VAR).map(|r| r.trim().to_string()),
    })
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    optional(var).ok_or(ConfigError::MissingCredential(var))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}
