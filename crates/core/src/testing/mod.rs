//! Testing utilities and mock implementations.
//!
//! Mocks for every component trait, so the watcher can be exercised without
//! a network or an SMTP server. Tiny local HTTP and SMTP responders cover the
//! real fetcher and notifier.
//!
//! # Example
//!
//! ```rust,ignore
//! use housing_watch_core::testing::{fixtures, MemorySnapshotStore, MockFetcher, MockNotifier};
//!
//! let fetcher = MockFetcher::with_html(fixtures::listings_page(&[("Room A", "/wohnen/a")]));
//! let notifier = MockNotifier::new();
//! let store = MemorySnapshotStore::new();
//!
//! let watcher = Watcher::new(fetcher, fixtures::parser(), notifier.clone(), store.clone());
//! watcher.run().await?;
//!
//! assert_eq!(notifier.notification_count().await, 1);
//! assert_eq!(store.contents().len(), 1);
//! ```

mod http_server;
mod memory_store;
mod mock_fetcher;
mod mock_notifier;
mod smtp_server;

pub use http_server::StaticHttpServer;
pub use memory_store::MemorySnapshotStore;
pub use mock_fetcher::MockFetcher;
pub use mock_notifier::{MockNotifier, RecordedNotification};
pub use smtp_server::{SmtpSession, StaticSmtpServer};

/// Test fixtures and helper functions.
pub mod fixtures {
    use url::Url;

    use crate::config::ParserConfig;
    use crate::listing::Listing;
    use crate::parser::ListingParser;

    /// Origin the fixture pages' relative links resolve against.
    pub const BASE_URL: &str = "https://www.stwdo.de/";

    /// Create a listing.
    pub fn listing(title: &str, url: &str) -> Listing {
        Listing::new(title, url)
    }

    /// A listing under the fixture origin, e.g. `offer("Room A", "a")`.
    pub fn offer(title: &str, slug: &str) -> Listing {
        Listing::new(title, format!("{}wohnen/angebot/{}", BASE_URL, slug))
    }

    /// A page with one anchor per `(title, href)` pair, surrounded by some
    /// navigation links that the default selector ignores.
    pub fn listings_page(entries: &[(&str, &str)]) -> String {
        let anchors: String = entries
            .iter()
            .map(|(title, href)| format!("      <li><a href=\"{}\">{}</a></li>\n", href, title))
            .collect();

        format!(
            "<!DOCTYPE html>\n<html>\n  <head><title>Aktuelle Wohnangebote</title></head>\n  <body>\n    <nav><a href=\"/studium/\">Studium</a><a href=\"/kontakt/\">Kontakt</a></nav>\n    <ul class=\"offers\">\n{}    </ul>\n  </body>\n</html>\n",
            anchors
        )
    }

    /// A page for the given listings, with hrefs relative to the origin.
    pub fn page_for(listings: &[Listing]) -> String {
        let entries: Vec<(String, String)> = listings
            .iter()
            .map(|l| {
                let href = l.url.strip_prefix(BASE_URL.trim_end_matches('/')).unwrap_or(&l.url);
                (l.title.clone(), href.to_string())
            })
            .collect();
        let borrowed: Vec<(&str, &str)> = entries
            .iter()
            .map(|(t, h)| (t.as_str(), h.as_str()))
            .collect();
        listings_page(&borrowed)
    }

    /// Default-config parser resolving against [`BASE_URL`].
    pub fn parser() -> ListingParser {
        parser_with(ParserConfig::default())
    }

    /// Parser with a custom config resolving against [`BASE_URL`].
    ///
    /// # Panics
    ///
    /// Panics if the config holds an invalid selector.
    pub fn parser_with(config: ParserConfig) -> ListingParser {
        let base = Url::parse(BASE_URL).expect("fixture base URL is valid");
        ListingParser::new(&config, base).expect("fixture parser config is valid")
    }
}
