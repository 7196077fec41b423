//! Error types for the fetcher module.

use thiserror::Error;

/// Errors that can occur while fetching the listings page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// No connection could be established.
    #[error("Connection to {url} failed: {reason}")]
    ConnectionFailed { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The response body could not be read.
    #[error("Failed to read response body from {url}: {reason}")]
    Body { url: String, reason: String },

    /// The HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}
