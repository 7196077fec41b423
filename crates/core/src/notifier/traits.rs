//! Trait definitions for the notifier module.

use async_trait::async_trait;

use crate::listing::Listing;

use super::error::NotifyError;

/// Delivers the new-listings notification.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Returns the name of this notifier implementation.
    fn name(&self) -> &str;

    /// Send one notification covering all of `listings`.
    ///
    /// An empty slice sends nothing.
    async fn notify(&self, listings: &[Listing]) -> Result<(), NotifyError>;
}
