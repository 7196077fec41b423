//! Persistence of the listings seen on the last notified run.
//!
//! The snapshot is a pretty-printed JSON array of `{"title", "url"}` objects.
//! It is read once at the start of a run and overwritten, never appended to,
//! once the notification for that run went out.

mod error;
mod json_store;
mod traits;

pub use error::SnapshotError;
pub use json_store::JsonSnapshotStore;
pub use traits::SnapshotStore;
