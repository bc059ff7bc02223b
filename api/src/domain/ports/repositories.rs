//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{FirmId, NewPropFirm, PropFirm};
use crate::error::DomainError;

/// Read gateway over the prop firm catalog.
///
/// Both read operations are snapshot reads: each call observes the catalog
/// as it stands at call time and never mutates it.
#[async_trait]
pub trait FirmRepository: Send + Sync {
    /// Every record currently known, in stable order: primary-key order
    /// for a persistent backing, insertion order for an in-memory one.
    async fn find_all(&self) -> Result<Vec<PropFirm>, DomainError>;

    /// Exact-match lookup on the unique slug. `Ok(None)` when no record
    /// has that id - absence is an expected outcome, not a fault.
    async fn find_by_id(&self, id: &FirmId) -> Result<Option<PropFirm>, DomainError>;

    /// Insert a new record. Sets `created_at` and `updated_at` to the
    /// same current instant; clients never supply timestamps.
    ///
    /// The write path exists for the external data loader; the catalog
    /// core itself is read-only.
    async fn create(&self, firm: &NewPropFirm) -> Result<PropFirm, DomainError>;
}
