//! Catalog service
//!
//! The filtering and retrieval core. Every operation is a stateless,
//! idempotent read over a snapshot of the catalog fetched from the
//! repository at call time.

use std::sync::Arc;

use crate::domain::entities::{FilterCriteria, FilterOutcome, FirmId, PropFirm};
use crate::domain::ports::FirmRepository;
use crate::error::DomainError;

/// Apply filter criteria to a catalog snapshot.
///
/// Evaluates a conjunction of the active predicates against each record,
/// preserving the snapshot's relative order:
/// - `min_funding`: excludes firms whose minimum funding requirement
///   exceeds the caller's ceiling. A firm with no recorded `min_funding`
///   is never excluded on this basis - the predicate has no data to
///   evaluate, so it passes the record through.
/// - `platform`: excludes firms whose platform list does not contain the
///   requested platform (exact, case-sensitive).
/// - `max_funding`: validated upstream for shape, but does not affect
///   inclusion. Kept in the request contract for forward compatibility.
///
/// Pure and deterministic: same snapshot plus same criteria always
/// produces the identical result.
pub fn apply_criteria(criteria: &FilterCriteria, catalog: Vec<PropFirm>) -> Vec<PropFirm> {
    catalog
        .into_iter()
        .filter(|firm| {
            if let Some(ceiling) = criteria.min_funding {
                if let Some(min_funding) = firm.min_funding {
                    if min_funding > ceiling {
                        return false;
                    }
                }
            }
            if let Some(ref platform) = criteria.platform {
                if !firm.supports_platform(platform) {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Service for catalog reads: list, lookup by id, and filtering
pub struct CatalogService<R>
where
    R: FirmRepository,
{
    firms: Arc<R>,
}

impl<R> CatalogService<R>
where
    R: FirmRepository,
{
    pub fn new(firms: Arc<R>) -> Self {
        Self { firms }
    }

    /// List every firm in the catalog, in the repository's stable order.
    pub async fn list_firms(&self) -> Result<Vec<PropFirm>, DomainError> {
        self.firms.find_all().await
    }

    /// Fetch one firm by its slug. `Ok(None)` when absent - identifiers
    /// are opaque and case-sensitive, no fuzzy matching.
    pub async fn get_firm(&self, id: &FirmId) -> Result<Option<PropFirm>, DomainError> {
        self.firms.find_by_id(id).await
    }

    /// Filter the catalog against the supplied criteria.
    ///
    /// Criteria are validated before the catalog is touched; an empty
    /// result is a normal outcome, never an error.
    pub async fn filter_firms(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<FilterOutcome, DomainError> {
        criteria.validate()?;

        let snapshot = self.firms.find_all().await?;
        let matches = apply_criteria(criteria, snapshot);

        Ok(FilterOutcome::new(matches))
    }
}
