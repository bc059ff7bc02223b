//! SeaORM entity models
//!
//! The storage-side mapping between domain attributes and column names.

pub mod prop_firms;
