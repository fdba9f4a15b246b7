//! Application layer for lunchpick.
//!
//! This crate provides the use case implementation that coordinates the
//! domain and infrastructure layers: loading the table, weighted picks,
//! the one-shot reset, and the table view commands.

pub mod lunch_usecase;

pub use lunch_usecase::LunchUseCase;
