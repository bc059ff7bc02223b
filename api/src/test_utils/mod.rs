//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The in-memory repository keeps insertion order, which stands in for
//! the primary-key order of the PostgreSQL adapter.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
