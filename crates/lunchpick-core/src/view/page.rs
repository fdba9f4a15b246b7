//! Pagination stage.
//!
//! Pages are 1-based and fixed-size. This stage only slices; callers clamp
//! the page number to `[1, page_count]` before asking and reset to page 1
//! whenever the filter or sort input changes (`ViewState` enforces both).

use crate::restaurant::Restaurant;

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed to show `total` rows. An empty set still has one
/// (empty) page so a page number can always be clamped into range.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Clamps a 1-based page number into `[1, page_count(total)]`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, page_count(total))
}

/// The slice `[(page-1)*size, page*size)`, clamped to the list bounds.
pub fn page_slice(records: &[Restaurant], page: usize) -> &[Restaurant] {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(records.len());
    if start >= records.len() {
        return &[];
    }
    &records[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<Restaurant> {
        (0..count)
            .map(|i| Restaurant {
                id: format!("{i}"),
                name: format!("Venue {i}"),
                reviews: None,
                cost: None,
                cuisine: "Cafe".to_string(),
                address: "1 Main St".to_string(),
                time: None,
                times_picked: 0,
            })
            .collect()
    }

    #[test]
    fn page_count_rounds_up_and_never_hits_zero() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(25), 3);
    }

    #[test]
    fn clamp_keeps_pages_inside_the_valid_range() {
        assert_eq!(clamp_page(0, 25), 1);
        assert_eq!(clamp_page(2, 25), 2);
        assert_eq!(clamp_page(9, 25), 3);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn slices_are_page_sized_with_a_short_last_page() {
        let all = records(25);
        assert_eq!(page_slice(&all, 1).len(), 10);
        assert_eq!(page_slice(&all, 2).len(), 10);
        assert_eq!(page_slice(&all, 3).len(), 5);
        assert!(page_slice(&all, 4).is_empty());
    }

    #[test]
    fn pages_cover_every_record_exactly_once() {
        let all = records(37);
        let mut seen = Vec::new();
        for page in 1..=page_count(all.len()) {
            seen.extend(page_slice(&all, page).iter().map(|r| r.id.clone()));
        }
        let expected: Vec<String> = all.iter().map(|r| r.id.clone()).collect();
        assert_eq!(seen, expected);
    }
}
