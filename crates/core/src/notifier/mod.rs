//! Email notification for newly found listings.
//!
//! One run sends at most one message: a fixed subject and a plain-text body
//! that lists every new offer's title and URL. Delivery goes over a single
//! authenticated SMTP session.

mod error;
mod message;
mod smtp;
mod traits;

pub use error::NotifyError;
pub use message::{build_message, compose_body, EMAIL_SUBJECT};
pub use smtp::SmtpNotifier;
pub use traits::Notifier;
