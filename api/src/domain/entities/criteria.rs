//! Filter criteria and outcome value objects
//!
//! `FilterCriteria` is request-scoped: constructed fresh per request,
//! immutable once built, never persisted.

use serde::Deserialize;

use super::firm::PropFirm;
use crate::error::DomainError;

/// Caller-supplied filter parameters for a single filter request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterCriteria {
    /// Ceiling on the firm's minimum funding requirement: firms whose
    /// `min_funding` exceeds this value are excluded.
    pub min_funding: Option<i32>,
    /// Accepted and validated for shape, but does not affect inclusion.
    /// Part of the request contract for forward compatibility.
    pub max_funding: Option<i32>,
    /// Required trading platform; firms not listing it are excluded.
    pub platform: Option<String>,
}

impl FilterCriteria {
    /// Reject malformed criteria before any catalog scan.
    /// Negative funding bounds make no sense for USD account sizes.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(min) = self.min_funding {
            if min < 0 {
                return Err(DomainError::InvalidCriteria(format!(
                    "minFunding must be non-negative, got {}",
                    min
                )));
            }
        }
        if let Some(max) = self.max_funding {
            if max < 0 {
                return Err(DomainError::InvalidCriteria(format!(
                    "maxFunding must be non-negative, got {}",
                    max
                )));
            }
        }
        Ok(())
    }

    /// True when no criterion is active - the filter is the identity.
    pub fn is_empty(&self) -> bool {
        self.min_funding.is_none() && self.max_funding.is_none() && self.platform.is_none()
    }
}

/// The result of one filter request: the matching firms in catalog order
/// plus their count.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub matches: Vec<PropFirm>,
    pub match_count: usize,
}

impl FilterOutcome {
    pub fn new(matches: Vec<PropFirm>) -> Self {
        let match_count = matches.len();
        Self {
            matches,
            match_count,
        }
    }
}
