//! Trait definitions for the snapshot module.

use crate::listing::Listing;

use super::error::SnapshotError;

/// Storage for the previously seen listings.
pub trait SnapshotStore: Send + Sync {
    /// Listings from the last saved snapshot; empty when none was saved yet.
    fn load(&self) -> Result<Vec<Listing>, SnapshotError>;

    /// Replace the stored snapshot with exactly `listings`.
    fn save(&self, listings: &[Listing]) -> Result<(), SnapshotError>;
}
