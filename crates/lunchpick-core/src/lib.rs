//! Domain layer for the lunchpick application.
//!
//! Holds everything with actual invariants: the record validator, the
//! weighted picker, the view pipeline, the session state, and the gateway
//! trait the infrastructure layer implements. No I/O happens here.

pub mod error;
pub mod picker;
pub mod restaurant;
pub mod session;
pub mod view;

// Re-export common error type
pub use error::LunchError;
