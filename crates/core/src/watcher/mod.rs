//! One watch run: fetch, parse, diff against the snapshot, notify, persist.
//!
//! The snapshot is only rewritten after the notification went out. A failed
//! send leaves it untouched so the same listings are reported again on the
//! next run.

mod runner;
mod types;

pub use runner::Watcher;
pub use types::{RunReport, WatchError};
