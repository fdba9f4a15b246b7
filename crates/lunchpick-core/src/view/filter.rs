//! Free-text filter stage.

use crate::restaurant::Restaurant;

/// Keeps records whose `name`, `cuisine`, or `address` contains the search
/// term, case-insensitively. An empty term keeps everything.
pub fn filter_records(records: &[Restaurant], term: &str) -> Vec<Restaurant> {
    if term.is_empty() {
        return records.to_vec();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle)
                || r.cuisine.to_lowercase().contains(&needle)
                || r.address.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
