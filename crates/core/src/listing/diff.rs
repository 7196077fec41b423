use std::collections::HashSet;

use super::Listing;

/// Listings in `current` whose URL does not appear in `previous`.
///
/// Order follows `current`.
pub fn new_listings(previous: &[Listing], current: &[Listing]) -> Vec<Listing> {
    let seen: HashSet<&str> = previous.iter().map(|l| l.url.as_str()).collect();

    current
        .iter()
        .filter(|l| !seen.contains(l.url.as_str()))
        .cloned()
        .collect()
}
