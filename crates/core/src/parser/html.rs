//! CSS-selector based listing extraction.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::config::{ParserConfig, TargetConfig};
use crate::listing::{dedup_by_url, Listing};

use super::ParseError;

/// Turns listing-page markup into deduplicated listings.
#[derive(Debug)]
pub struct ListingParser {
    item: Selector,
    item_source: String,
    link: Option<Selector>,
    title: Option<Selector>,
    base_url: Url,
    require_listings: bool,
}

impl ListingParser {
    /// Build a parser that resolves links against `base_url`.
    pub fn new(config: &ParserConfig, base_url: Url) -> Result<Self, ParseError> {
        Ok(Self {
            item: compile(&config.item_selector)?,
            item_source: config.item_selector.clone(),
            link: config.link_selector.as_deref().map(compile).transpose()?,
            title: config.title_selector.as_deref().map(compile).transpose()?,
            base_url,
            require_listings: config.require_listings,
        })
    }

    /// Build a parser for the watched page.
    ///
    /// Links resolve against `target.base_url` when set, otherwise against the
    /// origin of `target.url`.
    pub fn for_target(config: &ParserConfig, target: &TargetConfig) -> Result<Self, ParseError> {
        Self::new(config, base_url_for(target)?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Extract listings from `html`.
    ///
    /// Returns an empty list when nothing matches, unless the config requires
    /// listings.
    pub fn parse(&self, html: &str) -> Result<Vec<Listing>, ParseError> {
        let document = Html::parse_document(html);
        let mut found = Vec::new();

        for item in document.select(&self.item) {
            if let Some(listing) = self.extract(item) {
                found.push(listing);
            }
        }

        let matched = found.len();
        let listings = dedup_by_url(found);
        debug!(
            matched = matched,
            unique = listings.len(),
            "Parsed listings page"
        );

        if listings.is_empty() {
            if self.require_listings {
                return Err(ParseError::NoListings {
                    selector: self.item_source.clone(),
                });
            }
            warn!(
                selector = %self.item_source,
                "No listings found on page; markup may have changed"
            );
        }

        Ok(listings)
    }

    fn extract(&self, item: ElementRef<'_>) -> Option<Listing> {
        let link = match &self.link {
            Some(selector) => item.select(selector).next()?,
            None => item,
        };

        let href = link
            .value()
            .attr("href")
            .map(str::trim)
            .filter(|h| !h.is_empty())?;

        let title_element = match &self.title {
            Some(selector) => item.select(selector).next()?,
            None => link,
        };
        let title = element_text(title_element);
        if title.is_empty() {
            return None;
        }

        match self.base_url.join(href) {
            Ok(url) => Some(Listing::new(title, url.to_string())),
            Err(e) => {
                debug!(href = href, error = %e, "Skipping unresolvable link");
                None
            }
        }
    }
}

fn compile(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Text content of an element with whitespace collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn base_url_for(target: &TargetConfig) -> Result<Url, ParseError> {
    let invalid = |url: &str, e: url::ParseError| ParseError::InvalidBaseUrl {
        url: url.to_string(),
        reason: e.to_string(),
    };

    match &target.base_url {
        Some(base) => Url::parse(base).map_err(|e| invalid(base, e)),
        None => Url::parse(&target.url)
            .and_then(|url| url.join("/"))
            .map_err(|e| invalid(&target.url, e)),
    }
}
