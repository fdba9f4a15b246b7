//! Remote store gateway trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// An abstract gateway to the hosted restaurant table.
///
/// This trait decouples the core from the transport (REST, fake in tests).
/// The core reads the whole table and performs targeted or blanket updates
/// to `times_picked` only; it never creates, deletes, or alters any other
/// column.
#[async_trait]
pub trait RestaurantGateway: Send + Sync {
    /// Fetches every raw record in the restaurant table.
    ///
    /// Records come back untyped; the validator decides which ones enter
    /// the working set.
    async fn fetch_all(&self) -> Result<Vec<Value>>;

    /// Persists a new `times_picked` value for exactly one record.
    async fn update_times_picked(&self, id: &str, times_picked: u32) -> Result<()>;

    /// Persists the same `times_picked` value for every record.
    async fn reset_all_times_picked(&self, times_picked: u32) -> Result<()>;
}
