//! Lunch use case implementation.
//!
//! `LunchUseCase` owns the in-memory restaurant list and the session view
//! state, and coordinates every gateway interaction. Two policies hold for
//! all mutations: the remote write happens first and local state only
//! changes if it succeeds, and overlapping picks are serialized by keeping
//! the state lock across the write so a slow update can never double-count.

use std::sync::Arc;

use tokio::sync::Mutex;

use lunchpick_core::error::{LunchError, Result};
use lunchpick_core::picker::{RandomSource, ThreadRandom, pick_index};
use lunchpick_core::restaurant::{Restaurant, RestaurantGateway, validate_collection};
use lunchpick_core::session::{ResetGuard, ViewState};
use lunchpick_core::view::{SortKey, clamp_page, filter_records, page_count, page_slice, sort_records};
use lunchpick_infrastructure::RetryPolicy;

/// Everything a session owns, guarded by one lock: the working set, the
/// table view state, and the one-shot reset guard.
#[derive(Default)]
struct SessionState {
    restaurants: Vec<Restaurant>,
    view: ViewState,
    reset_guard: ResetGuard,
}

impl SessionState {
    fn filtered(&self) -> Vec<Restaurant> {
        filter_records(&self.restaurants, &self.view.search)
    }
}

/// Use case for picking lunch and browsing the venue table.
///
/// The gateway arrives by constructor injection, so tests run against a
/// fake store and nothing reaches into ambient state.
pub struct LunchUseCase {
    gateway: Arc<dyn RestaurantGateway>,
    retry: RetryPolicy,
    state: Mutex<SessionState>,
}

impl LunchUseCase {
    pub fn new(gateway: Arc<dyn RestaurantGateway>) -> Self {
        Self::with_retry_policy(gateway, RetryPolicy::default())
    }

    pub fn with_retry_policy(gateway: Arc<dyn RestaurantGateway>, retry: RetryPolicy) -> Self {
        Self {
            gateway,
            retry,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Loads the restaurant table, retrying transient network failures.
    ///
    /// Invalid rows are dropped from the working set without surfacing
    /// individually. On failure the prior in-memory list stays untouched.
    /// Returns the number of valid records loaded.
    pub async fn load(&self) -> Result<usize> {
        let gateway = Arc::clone(&self.gateway);
        let raw = match self.retry.run(|| gateway.fetch_all()).await {
            Ok(raw) => raw,
            Err(err) => {
                self.record_error(&err).await;
                return Err(err);
            }
        };

        let restaurants = validate_collection(&raw);
        let dropped = raw.len() - restaurants.len();
        if dropped > 0 {
            tracing::debug!(dropped, "dropped invalid restaurant rows");
        }
        tracing::info!(loaded = restaurants.len(), "restaurant table loaded");

        let mut state = self.state.lock().await;
        state.restaurants = restaurants;
        state.view.last_error = None;
        let filtered_total = state.filtered().len();
        state.view.page = clamp_page(state.view.page, filtered_total);
        Ok(state.restaurants.len())
    }

    /// Picks one restaurant with a fresh random draw.
    pub async fn pick(&self) -> Result<Restaurant> {
        self.pick_with_source(&mut ThreadRandom).await
    }

    /// Picks one restaurant using the given draw source.
    ///
    /// The incremented counter is written to the store first; local state
    /// only reflects the pick once the write succeeds. The state lock is
    /// held across the write, so a second pick issued while one is
    /// outstanding waits instead of racing.
    pub async fn pick_with_source(&self, rng: &mut dyn RandomSource) -> Result<Restaurant> {
        let mut state = self.state.lock().await;

        let index = pick_index(&state.restaurants, rng)?;
        let picked = &state.restaurants[index];
        let id = picked.id.clone();
        let new_count = picked.times_picked + 1;

        if let Err(err) = self.gateway.update_times_picked(&id, new_count).await {
            state.view.last_error = Some(err.to_string());
            return Err(err);
        }

        state.restaurants[index].times_picked = new_count;
        let picked = state.restaurants[index].clone();
        state.view.last_picked = Some(picked.clone());
        state.view.last_error = None;
        tracing::info!(id = %picked.id, name = %picked.name, times_picked = new_count, "picked restaurant");
        Ok(picked)
    }

    /// Resets every pick counter to zero, once per session.
    ///
    /// The guard is checked before the blanket write and only spent after
    /// it succeeds, so a failed reset can be retried; a second successful
    /// reset is rejected without touching the gateway.
    pub async fn reset_all(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        state.reset_guard.ensure_unused()?;

        if let Err(err) = self.gateway.reset_all_times_picked(0).await {
            state.view.last_error = Some(err.to_string());
            return Err(err);
        }

        for restaurant in &mut state.restaurants {
            restaurant.times_picked = 0;
        }
        state.view.last_picked = None;
        state.view.last_error = None;
        state.reset_guard.mark_used();
        tracing::info!("pick counters reset");
        Ok(())
    }

    /// Replaces the search term; the view returns to page 1.
    pub async fn set_search(&self, term: impl Into<String> + Send) {
        let mut state = self.state.lock().await;
        state.view.set_search(term);
    }

    /// Applies a header click to the sort config; the view returns to
    /// page 1.
    pub async fn toggle_sort(&self, key: SortKey) {
        let mut state = self.state.lock().await;
        state.view.toggle_sort(key);
    }

    /// Moves to a page, clamped against the filtered row count.
    pub async fn set_page(&self, page: usize) {
        let mut state = self.state.lock().await;
        let filtered_total = state.filtered().len();
        state.view.set_page(page, filtered_total);
    }

    /// The rows currently on screen: filter → sort → paginate.
    pub async fn visible_page(&self) -> Vec<Restaurant> {
        let state = self.state.lock().await;
        let mut rows = state.filtered();
        if let Some(sort) = state.view.sort {
            sort_records(&mut rows, sort.key, sort.direction);
        }
        let page = clamp_page(state.view.page, rows.len());
        page_slice(&rows, page).to_vec()
    }

    /// Number of pages under the current filter.
    pub async fn page_count(&self) -> usize {
        let state = self.state.lock().await;
        page_count(state.filtered().len())
    }

    /// Snapshot of the full working set.
    pub async fn restaurants(&self) -> Vec<Restaurant> {
        self.state.lock().await.restaurants.clone()
    }

    /// Snapshot of the current view state.
    pub async fn view(&self) -> ViewState {
        self.state.lock().await.view.clone()
    }

    /// The most recent pick, if any.
    pub async fn last_picked(&self) -> Option<Restaurant> {
        self.state.lock().await.view.last_picked.clone()
    }

    /// Whether the session's single reset has been spent.
    pub async fn reset_used(&self) -> bool {
        self.state.lock().await.reset_guard.is_used()
    }

    async fn record_error(&self, err: &LunchError) {
        let mut state = self.state.lock().await;
        state.view.last_error = Some(err.to_string());
    }
}
