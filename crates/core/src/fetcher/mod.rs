//! Page fetching.
//!
//! This module provides the `Fetcher` trait and an HTTP implementation that
//! issues a single GET against the watched page. There are no retries; a
//! failed fetch fails the run.

mod error;
mod http;
mod traits;

pub use error::FetchError;
pub use http::HttpFetcher;
pub use traits::Fetcher;
