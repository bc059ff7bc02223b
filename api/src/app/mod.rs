//! Application layer
//!
//! Contains use cases and service orchestration.

pub mod catalog_service;

pub use catalog_service::{apply_criteria, CatalogService};
