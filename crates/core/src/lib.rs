pub mod config;
pub mod fetcher;
pub mod listing;
pub mod notifier;
pub mod parser;
pub mod snapshot;
pub mod testing;
pub mod watcher;

pub use config::{
    load_config, load_credentials, validate_config, Config, ConfigError, EmailCredentials,
    ParserConfig, SmtpConfig, SmtpSecurity, SnapshotConfig, TargetConfig,
};
pub use fetcher::{FetchError, Fetcher, HttpFetcher};
pub use listing::{dedup_by_url, new_listings, Listing};
pub use notifier::{Notifier, NotifyError, SmtpNotifier};
pub use parser::{ListingParser, ParseError};
pub use snapshot::{JsonSnapshotStore, SnapshotError, SnapshotStore};
pub use watcher::{RunReport, WatchError, Watcher};
