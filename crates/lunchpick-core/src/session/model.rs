//! Client-local session state.
//!
//! Nothing in here is persisted; a session starts fresh on every launch.

use serde::{Deserialize, Serialize};

use crate::error::{LunchError, Result};
use crate::restaurant::Restaurant;
use crate::view::{SortConfig, SortKey, clamp_page};

/// The table view's transient state: active sort, search term, current
/// page, the last pick, and the last user-visible error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewState {
    /// Active sort column and direction, if any.
    pub sort: Option<SortConfig>,
    /// Free-text search term. Empty means no filtering.
    pub search: String,
    /// Current 1-based page number.
    pub page: usize,
    /// The most recently picked restaurant, shown on the result card.
    pub last_picked: Option<Restaurant>,
    /// The most recent user-visible error message, if any.
    pub last_error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort: None,
            search: String::new(),
            page: 1,
            last_picked: None,
            last_error: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a header click: same column flips direction, a new column
    /// starts ascending. Changing the sort returns the view to page 1.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = Some(SortConfig::toggle(self.sort, key));
        self.page = 1;
    }

    /// Replaces the search term. Changing the filter returns the view to
    /// page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Moves to a page, clamped against the current filtered row count.
    pub fn set_page(&mut self, page: usize, filtered_total: usize) {
        self.page = clamp_page(page, filtered_total);
    }
}

/// One-shot guard allowing a single bulk pick-count reset per session.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ResetGuard {
    used: bool,
}

impl ResetGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the session's single reset has been spent.
    pub fn is_used(&self) -> bool {
        self.used
    }

    /// Fails with `ResetAlreadyUsed` once the reset has been spent.
    ///
    /// Checking and spending are separate steps: the caller checks before
    /// the remote write and only marks the guard used after the write
    /// succeeds, so a failed reset can be retried.
    pub fn ensure_unused(&self) -> Result<()> {
        if self.used {
            Err(LunchError::ResetAlreadyUsed)
        } else {
            Ok(())
        }
    }

    /// Spends the session's single reset.
    pub fn mark_used(&mut self) {
        self.used = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::SortDirection;

    #[test]
    fn toggling_sort_returns_to_page_one() {
        let mut view = ViewState::new();
        view.set_page(3, 50);
        assert_eq!(view.page, 3);

        view.toggle_sort(SortKey::Name);
        assert_eq!(view.page, 1);
        let sort = view.sort.unwrap();
        assert_eq!(sort.key, SortKey::Name);
        assert_eq!(sort.direction, SortDirection::Asc);

        view.toggle_sort(SortKey::Name);
        assert_eq!(view.sort.unwrap().direction, SortDirection::Desc);
    }

    #[test]
    fn changing_the_search_returns_to_page_one() {
        let mut view = ViewState::new();
        view.set_page(4, 100);
        view.set_search("thai");
        assert_eq!(view.page, 1);
        assert_eq!(view.search, "thai");
    }

    #[test]
    fn page_changes_are_clamped_to_the_filtered_total() {
        let mut view = ViewState::new();
        view.set_page(99, 15);
        assert_eq!(view.page, 2);
        view.set_page(0, 15);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn reset_guard_spends_exactly_once() {
        let mut guard = ResetGuard::new();
        assert!(!guard.is_used());
        assert!(guard.ensure_unused().is_ok());

        guard.mark_used();
        assert!(guard.is_used());
        assert!(matches!(
            guard.ensure_unused(),
            Err(LunchError::ResetAlreadyUsed)
        ));
    }
}
