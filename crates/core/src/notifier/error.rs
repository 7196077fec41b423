//! Error types for the notifier module.

use thiserror::Error;

/// Errors that can occur while composing or sending the notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Sender or recipient is not a valid mailbox.
    #[error("Invalid email address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The message could not be assembled.
    #[error("Failed to build email: {0}")]
    Message(String),

    /// The SMTP transport could not be configured.
    #[error("Failed to configure SMTP transport: {0}")]
    Transport(String),

    /// Connecting, authenticating or sending failed.
    #[error("Email delivery failed: {0}")]
    Delivery(String),
}
