//! Listing model and the set operations the watcher runs on it.
//!
//! A `Listing` is identified by its URL. Deduplication and diffing both key
//! on that field and ignore the title.

mod dedup;
mod diff;
mod types;

pub use dedup::dedup_by_url;
pub use diff::new_listings;
pub use types::Listing;
