//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::entities::{FirmId, PropFirm};

/// Create a test firm with default values
pub fn test_firm() -> PropFirm {
    PropFirm {
        id: FirmId::new("ftmo"),
        name: "FTMO".to_string(),
        logo_url: Some("https://cdn.example.com/logos/ftmo.png".to_string()),
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
        // Fixed instant so fixtures built at different times compare equal.
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

/// Create a test firm with a specific slug
pub fn test_firm_with_id(id: &str) -> PropFirm {
    PropFirm {
        id: FirmId::new(id),
        name: id.to_uppercase(),
        ..test_firm()
    }
}

/// Create a test firm with a specific minimum funding requirement
pub fn test_firm_with_funding(id: &str, min_funding: Option<i32>) -> PropFirm {
    PropFirm {
        min_funding,
        max_funding: min_funding.map(|m| m.saturating_mul(10)),
        ..test_firm_with_id(id)
    }
}

/// Create a test firm supporting the given platforms
pub fn test_firm_with_platforms(id: &str, platforms: &[&str]) -> PropFirm {
    PropFirm {
        platforms: platforms.iter().map(|p| p.to_string()).collect(),
        ..test_firm_with_id(id)
    }
}
