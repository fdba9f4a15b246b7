pub mod pick;
pub mod reset;
pub mod table;

use std::sync::Arc;

use anyhow::{Context, Result};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use lunchpick_application::LunchUseCase;
use lunchpick_core::restaurant::Restaurant;
use lunchpick_infrastructure::{SupabaseConfig, SupabaseGateway};

/// Builds the use case from environment configuration and loads the table.
pub(crate) async fn load_usecase() -> Result<LunchUseCase> {
    let config = SupabaseConfig::from_env()
        .context("the remote store needs SUPABASE_URL and SUPABASE_ANON_KEY")?;
    let gateway = Arc::new(SupabaseGateway::new(config));

    let usecase = LunchUseCase::new(gateway);
    usecase
        .load()
        .await
        .context("failed to load restaurants; please try again")?;
    Ok(usecase)
}

/// Google Maps search link for a venue's address.
pub(crate) fn maps_link(address: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        utf8_percent_encode(address, NON_ALPHANUMERIC)
    )
}

/// Human-readable review summary, e.g. `4.2 stars (1106 reviews)`.
pub(crate) fn reviews_label(restaurant: &Restaurant) -> String {
    match restaurant.parsed_reviews() {
        Some(reviews) => format!("{} stars ({} reviews)", reviews.rating, reviews.count),
        None => "No reviews available".to_string(),
    }
}
