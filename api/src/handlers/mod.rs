//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod filter;
pub mod firms;

pub use filter::filter_firms;
pub use firms::{get_firm, list_firms};
