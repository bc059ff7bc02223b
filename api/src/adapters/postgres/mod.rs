//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod firm_repo;

#[cfg(test)]
mod integration_tests;

pub use firm_repo::PostgresFirmRepository;
