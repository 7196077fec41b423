//! Flat-file JSON snapshot store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::listing::Listing;

use super::{SnapshotError, SnapshotStore};

/// Snapshot kept in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the snapshot is staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> SnapshotError {
        SnapshotError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<Vec<Listing>, SnapshotError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let listings: Vec<Listing> =
            serde_json::from_slice(&data).map_err(|source| SnapshotError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            path = %self.path.display(),
            listings = listings.len(),
            "Snapshot loaded"
        );
        Ok(listings)
    }

    fn save(&self, listings: &[Listing]) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        // serde_json leaves non-ASCII characters unescaped
        let data = serde_json::to_string_pretty(listings).map_err(|e| self.io_error(e.into()))?;

        let staging = self.staging_path();
        fs::write(&staging, data).map_err(|e| self.io_error(e))?;
        fs::rename(&staging, &self.path).map_err(|e| {
            let _ = fs::remove_file(&staging);
            self.io_error(e)
        })?;

        debug!(
            path = %self.path.display(),
            listings = listings.len(),
            "Snapshot saved"
        );
        Ok(())
    }
}
