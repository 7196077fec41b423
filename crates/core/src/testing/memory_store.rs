//! In-memory snapshot store for testing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::listing::Listing;
use crate::snapshot::{SnapshotError, SnapshotStore};

#[derive(Debug, Default)]
struct Inner {
    contents: Vec<Listing>,
    saves: usize,
    next_load_error: Option<SnapshotError>,
    next_save_error: Option<SnapshotError>,
}

/// Snapshot store kept in memory.
///
/// Clones share the same contents, so a test can keep a handle while the
/// watcher owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemorySnapshotStore {
    /// Create an empty store, as if no snapshot file existed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `listings`.
    pub fn with_contents(listings: Vec<Listing>) -> Self {
        let store = Self::new();
        store.lock().contents = listings;
        store
    }

    /// Current stored listings.
    pub fn contents(&self) -> Vec<Listing> {
        self.lock().contents.clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    /// Configure the next load to fail with the given error.
    pub fn set_next_load_error(&self, error: SnapshotError) {
        self.lock().next_load_error = Some(error);
    }

    /// Configure the next save to fail with the given error.
    pub fn set_next_save_error(&self, error: SnapshotError) {
        self.lock().next_save_error = Some(error);
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Vec<Listing>, SnapshotError> {
        let mut inner = self.lock();
        if let Some(error) = inner.next_load_error.take() {
            return Err(error);
        }
        Ok(inner.contents.clone())
    }

    fn save(&self, listings: &[Listing]) -> Result<(), SnapshotError> {
        let mut inner = self.lock();
        if let Some(error) = inner.next_save_error.take() {
            return Err(error);
        }
        inner.contents = listings.to_vec();
        inner.saves += 1;
        Ok(())
    }
}
