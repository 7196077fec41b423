//! Trait definitions for the fetcher module.

use async_trait::async_trait;

use super::error::FetchError;

/// Source of the raw listings markup.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// The URL being fetched, for logging.
    fn target(&self) -> &str;

    /// Fetch the page and return its body as text.
    async fn fetch(&self) -> Result<String, FetchError>;
}
