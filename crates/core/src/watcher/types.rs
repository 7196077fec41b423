//! Types for the watcher.

use std::fmt;
use thiserror::Error;

use crate::fetcher::FetchError;
use crate::listing::Listing;
use crate::notifier::NotifyError;
use crate::parser::ParseError;
use crate::snapshot::SnapshotError;

/// Errors that abort a watch run.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Fetching the page failed.
    #[error("fetching listings page failed")]
    Fetch(#[from] FetchError),

    /// The page could not be parsed.
    #[error("parsing listings page failed")]
    Parse(#[from] ParseError),

    /// The snapshot could not be loaded or saved.
    #[error("snapshot store failed")]
    Snapshot(#[from] SnapshotError),

    /// The notification could not be sent.
    #[error("sending notification failed")]
    Notify(#[from] NotifyError),
}

/// Outcome of a successful run.
///
/// `Display` renders the one-line status summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Unique listings found on the page.
    pub fetched: usize,
    /// Listings not present in the previous snapshot, in page order.
    pub new_listings: Vec<Listing>,
    /// Whether the snapshot was rewritten.
    pub snapshot_updated: bool,
}

impl RunReport {
    pub fn has_new_listings(&self) -> bool {
        !self.new_listings.is_empty()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_new_listings() {
            write!(
                f,
                "✅ {} new listing(s) found. Email sent.",
                self.new_listings.len()
            )
        } else {
            write!(f, "ℹ️ No new listings.")
        }
    }
}
