//! Extraction of listings from the fetched markup.
//!
//! `ListingParser` applies the configured CSS selectors to the page:
//!
//! - the item selector yields one candidate per match
//! - the link is the item itself, or the first match of the link selector
//!   inside it
//! - the title is the link text, or the text of the first match of the title
//!   selector inside the item
//!
//! Candidates without a usable title or href are dropped. Relative hrefs are
//! resolved against the base URL and the result is deduplicated by URL.
//!
//! # Example
//!
//! ```ignore
//! use housing_watch_core::{ListingParser, ParserConfig, TargetConfig};
//!
//! let parser = ListingParser::for_target(&ParserConfig::default(), &TargetConfig::default())?;
//! let listings = parser.parse(&html)?;
//! for listing in &listings {
//!     println!("{} -> {}", listing.title, listing.url);
//! }
//! ```

mod error;
mod html;

pub use error::ParseError;
pub use html::ListingParser;
