//! Mock fetcher for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::fetcher::{FetchError, Fetcher};

/// Mock implementation of the Fetcher trait.
///
/// Provides controllable behavior for testing:
/// - Serve configurable markup
/// - Count fetches
/// - Simulate network failures
#[derive(Debug, Clone)]
pub struct MockFetcher {
    url: String,
    /// Markup returned by `fetch`.
    html: Arc<RwLock<String>>,
    /// If set, the next fetch will fail with this error.
    next_error: Arc<RwLock<Option<FetchError>>>,
    /// Number of fetch calls, failed ones included.
    fetches: Arc<RwLock<usize>>,
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFetcher {
    /// Create a mock fetcher serving an empty page.
    pub fn new() -> Self {
        Self::with_html(String::new())
    }

    /// Create a mock fetcher serving `html`.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            url: "https://www.stwdo.de/wohnen/aktuelle-wohnangebote".to_string(),
            html: Arc::new(RwLock::new(html.into())),
            next_error: Arc::new(RwLock::new(None)),
            fetches: Arc::new(RwLock::new(0)),
        }
    }

    /// Replace the served markup.
    pub async fn set_html(&self, html: impl Into<String>) {
        *self.html.write().await = html.into();
    }

    /// Configure the next fetch to fail with the given error.
    pub async fn set_next_error(&self, error: FetchError) {
        *self.next_error.write().await = Some(error);
    }

    /// Get the number of fetches performed.
    pub async fn fetch_count(&self) -> usize {
        *self.fetches.read().await
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    fn target(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        *self.fetches.write().await += 1;

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        Ok(self.html.read().await.clone())
    }
}
