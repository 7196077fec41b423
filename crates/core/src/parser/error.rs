//! Error types for the parser module.

use thiserror::Error;

/// Errors that can occur while building the parser or reading a page.
///
/// A page whose structure does not match the selectors is not an error by
/// itself; it yields no listings. Only `require_listings` turns that into
/// [`ParseError::NoListings`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// A configured CSS selector does not parse.
    #[error("Invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The base URL for link resolution is unusable.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The page produced no listings and the config requires at least one.
    #[error("No listings matched '{selector}'; the page markup may have changed")]
    NoListings { selector: String },
}
