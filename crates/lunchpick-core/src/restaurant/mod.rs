//! Restaurant domain module.
//!
//! # Module Structure
//!
//! - `model`: the `Restaurant` record and parsed `Reviews` value
//! - `validate`: normalization of raw store rows into typed records
//! - `gateway`: the remote store gateway trait

mod gateway;
mod model;
mod validate;

// Re-export public API
pub use gateway::RestaurantGateway;
pub use model::{Restaurant, Reviews};
pub use validate::{validate_collection, validate_record};
