//! Prop firm domain entity
//!
//! Represents a proprietary trading firm (funded trader program) in the
//! catalog.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unique identifier for a prop firm - a stable slug such as `ftmo` or
/// `apex-trader-funding`. Treated as an opaque, case-sensitive string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FirmId(pub String);

impl FirmId {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FirmId {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}

impl From<&str> for FirmId {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl std::fmt::Display for FirmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A proprietary trading firm catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropFirm {
    pub id: FirmId,
    /// Display name, e.g. "FTMO"
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    /// Profit sharing ratio (trader/firm), e.g. "90/10"
    pub profit_split: Option<String>,
    /// Minimum funded account size in USD
    pub min_funding: Option<i32>,
    /// Maximum funded account size in USD
    pub max_funding: Option<i32>,
    /// Typical evaluation/challenge fee
    pub evaluation_fee: Option<Decimal>,
    /// Average user rating (0-5)
    pub rating: Option<Decimal>,
    pub review_count: Option<i32>,
    pub is_featured: bool,
    /// Trading platforms the firm supports, e.g. "MT4", "cTrader"
    pub platforms: Vec<String>,
    pub affiliate_link: Option<String>,
    pub affiliate_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PropFirm {
    /// Check the record invariants: non-empty id, funding bounds ordered,
    /// rating within [0, 5], non-negative review count.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.as_str().is_empty() {
            return Err("firm id must not be empty".to_string());
        }
        if let (Some(min), Some(max)) = (self.min_funding, self.max_funding) {
            if min > max {
                return Err(format!(
                    "min_funding {} exceeds max_funding {}",
                    min, max
                ));
            }
        }
        if let Some(rating) = self.rating {
            if rating < Decimal::ZERO || rating > Decimal::from(5) {
                return Err(format!("rating {} outside [0, 5]", rating));
            }
        }
        if let Some(count) = self.review_count {
            if count < 0 {
                return Err(format!("review_count {} is negative", count));
            }
        }
        Ok(())
    }

    /// Whether the firm supports the given trading platform.
    /// Exact, case-sensitive membership test.
    pub fn supports_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }
}

/// Data needed to create a new prop firm record.
///
/// Timestamps are absent on purpose: the repository's insert path assigns
/// `created_at` and `updated_at` to the same current instant.
#[derive(Debug, Clone)]
pub struct NewPropFirm {
    pub id: FirmId,
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub profit_split: Option<String>,
    pub min_funding: Option<i32>,
    pub max_funding: Option<i32>,
    pub evaluation_fee: Option<Decimal>,
    pub rating: Option<Decimal>,
    pub review_count: Option<i32>,
    pub is_featured: bool,
    pub platforms: Vec<String>,
    pub affiliate_link: Option<String>,
    pub affiliate_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_firm() -> PropFirm {
        PropFirm {
            id: FirmId::new("ftmo"),
            name: "FTMO".to_string(),
            logo_url: None,
            website_url: Some("https://ftmo.com".to_string()),
            profit_split: Some("90/10".to_string()),
            min_funding: Some(10_000),
            max_funding: Some(200_000),
            evaluation_fee: Some(Decimal::new(15500, 2)),
            rating: Some(Decimal::new(48, 1)),
            review_count: Some(1247),
            is_featured: true,
            platforms: vec!["MT4".to_string(), "MT5".to_string()],
            affiliate_link: None,
            affiliate_code: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn valid_firm_passes_validation() {
        assert!(make_firm().validate().is_ok());
    }

    #[test]
    fn empty_id_rejected() {
        let mut firm = make_firm();
        firm.id = FirmId::new("");
        assert!(firm.validate().is_err());
    }

    #[test]
    fn inverted_funding_bounds_rejected() {
        let mut firm = make_firm();
        firm.min_funding = Some(300_000);
        assert!(firm.validate().is_err());
    }

    #[test]
    fn funding_bound_missing_is_allowed() {
        let mut firm = make_firm();
        firm.max_funding = None;
        assert!(firm.validate().is_ok());
    }

    #[test]
    fn rating_out_of_range_rejected() {
        let mut firm = make_firm();
        firm.rating = Some(Decimal::new(51, 1));
        assert!(firm.validate().is_err());

        firm.rating = Some(Decimal::new(-1, 1));
        assert!(firm.validate().is_err());
    }

    #[test]
    fn supports_platform_is_case_sensitive() {
        let firm = make_firm();
        assert!(firm.supports_platform("MT4"));
        assert!(!firm.supports_platform("mt4"));
        assert!(!firm.supports_platform("cTrader"));
    }

    #[test]
    fn firm_id_display() {
        assert_eq!(FirmId::new("apex-trader-funding").to_string(), "apex-trader-funding");
    }
}
