//! SMTP notifier built on lettre's tokio transport.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::{EmailCredentials, SmtpConfig, SmtpSecurity};
use crate::listing::Listing;

use super::message::build_message;
use super::{NotifyError, Notifier};

/// Sends the notification through an authenticated SMTP session.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
    endpoint: String,
}

impl SmtpNotifier {
    /// Configure the transport. No connection is made until `notify`.
    pub fn new(config: &SmtpConfig, credentials: EmailCredentials) -> Result<Self, NotifyError> {
        let from = parse_mailbox(&credentials.sender)?;
        let to = parse_mailbox(credentials.recipient())?;

        let builder = match config.security {
            SmtpSecurity::Starttls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                    .map_err(|e| NotifyError::Transport(e.to_string()))?
            }
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| NotifyError::Transport(e.to_string()))?,
            SmtpSecurity::Plain => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.host.as_str())
            }
        };

        let port = config.effective_port();
        let transport = builder
            .port(port)
            .credentials(Credentials::new(
                credentials.sender.clone(),
                credentials.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        Ok(Self {
            transport,
            from,
            to,
            endpoint: format!("{}:{}", config.host, port),
        })
    }

    /// `host:port` of the SMTP server.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    fn name(&self) -> &str {
        "smtp"
    }

    async fn notify(&self, listings: &[Listing]) -> Result<(), NotifyError> {
        if listings.is_empty() {
            return Ok(());
        }

        let message = build_message(&self.from, &self.to, listings)?;

        debug!(
            endpoint = %self.endpoint,
            to = %self.to,
            listings = listings.len(),
            "Sending notification email"
        );

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        info!(
            endpoint = %self.endpoint,
            code = %response.code(),
            listings = listings.len(),
            "Notification email sent"
        );
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| NotifyError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}
