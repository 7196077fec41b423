//! Types for scraped housing listings.

use serde::{Deserialize, Serialize};

/// A scraped housing offer.
///
/// The `url` is the identity key: two listings with the same URL are the same
/// offer, whatever their titles say.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Listing {
    /// Human-readable title, whitespace-normalized.
    pub title: String,
    /// Absolute URL of the offer.
    pub url: String,
}

impl Listing {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}
