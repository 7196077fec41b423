//! The watch pipeline.

use std::time::Instant;
use tracing::info;

use crate::fetcher::Fetcher;
use crate::listing::new_listings;
use crate::notifier::Notifier;
use crate::parser::ListingParser;
use crate::snapshot::SnapshotStore;

use super::types::{RunReport, WatchError};

/// Runs the fetch → parse → diff → notify → persist pipeline once per call.
pub struct Watcher<F, N, S>
where
    F: Fetcher,
    N: Notifier,
    S: SnapshotStore,
{
    fetcher: F,
    parser: ListingParser,
    notifier: N,
    store: S,
}

impl<F, N, S> Watcher<F, N, S>
where
    F: Fetcher,
    N: Notifier,
    S: SnapshotStore,
{
    pub fn new(fetcher: F, parser: ListingParser, notifier: N, store: S) -> Self {
        Self {
            fetcher,
            parser,
            notifier,
            store,
        }
    }

    /// Run one check.
    ///
    /// Nothing is sent and nothing is written when there are no new listings.
    /// When there are, the snapshot is replaced by the current listings only
    /// after the notifier succeeded.
    pub async fn run(&self) -> Result<RunReport, WatchError> {
        let start = Instant::now();
        info!(url = %self.fetcher.target(), "Checking for new listings");

        let html = self.fetcher.fetch().await?;
        let current = self.parser.parse(&html)?;
        let previous = self.store.load()?;

        let fresh = new_listings(&previous, &current);
        info!(
            fetched = current.len(),
            previously_seen = previous.len(),
            new = fresh.len(),
            "Compared against snapshot"
        );

        if fresh.is_empty() {
            return Ok(RunReport {
                fetched: current.len(),
                new_listings: fresh,
                snapshot_updated: false,
            });
        }

        for listing in &fresh {
            info!(title = %listing.title, url = %listing.url, "New listing");
        }

        self.notifier.notify(&fresh).await?;
        self.store.save(&current)?;

        info!(
            notifier = self.notifier.name(),
            new = fresh.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Notified and snapshot updated"
        );

        Ok(RunReport {
            fetched: current.len(),
            new_listings: fresh,
            snapshot_updated: true,
        })
    }
}
