//! Infrastructure layer for the lunchpick application.
//!
//! Adapters for the external collaborators: the hosted restaurant table
//! (PostgREST over reqwest), its environment configuration, and the retry
//! policy for the load path.

pub mod config;
pub mod retry;
pub mod supabase_gateway;

pub use config::SupabaseConfig;
pub use retry::RetryPolicy;
pub use supabase_gateway::SupabaseGateway;
