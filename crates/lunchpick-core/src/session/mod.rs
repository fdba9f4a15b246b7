//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: the transient `ViewState` and the one-shot `ResetGuard`

mod model;

pub use model::{ResetGuard, ViewState};
