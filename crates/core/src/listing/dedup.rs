//! Deduplication of parsed listings by URL.

use std::collections::HashMap;

use super::Listing;

/// Deduplicate listings by URL.
///
/// The first occurrence of a URL fixes its position in the output; a later
/// occurrence of the same URL replaces the stored entry, so its title wins.
pub fn dedup_by_url(listings: Vec<Listing>) -> Vec<Listing> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<Listing> = Vec::with_capacity(listings.len());

    for listing in listings {
        match position.get(&listing.url) {
            Some(&idx) => unique[idx] = listing,
            None => {
                position.insert(listing.url.clone(), unique.len());
                unique.push(listing);
            }
        }
    }

    unique
}
