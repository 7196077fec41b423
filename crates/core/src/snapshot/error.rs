//! Error types for the snapshot module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving the snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The file exists but does not hold a JSON listing array.
    #[error("Snapshot {path} is corrupt")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file could not be read or written.
    #[error("Snapshot I/O failed for {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
