//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{FirmId, NewPropFirm, PropFirm};
use crate::domain::ports::FirmRepository;
use crate::error::DomainError;

/// In-memory FirmRepository preserving insertion order.
///
/// Can be flipped into an "unavailable" state to exercise the
/// StoreUnavailable path.
#[derive(Default)]
pub struct InMemoryFirmRepository {
    firms: Arc<RwLock<Vec<PropFirm>>>,
    unavailable: Arc<RwLock<bool>>,
}

impl InMemoryFirmRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a firm for testing
    pub fn with_firm(self, firm: PropFirm) -> Self {
        self.firms.write().unwrap().push(firm);
        self
    }

    /// Make every subsequent call fail with StoreUnavailable
    pub fn set_unavailable(&self) {
        *self.unavailable.write().unwrap() = true;
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if *self.unavailable.read().unwrap() {
            Err(DomainError::StoreUnavailable(
                "in-memory store marked unavailable".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FirmRepository for InMemoryFirmRepository {
    async fn find_all(&self) -> Result<Vec<PropFirm>, DomainError> {
        self.check_available()?;
        Ok(self.firms.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: &FirmId) -> Result<Option<PropFirm>, DomainError> {
        self.check_available()?;
        Ok(self
            .firms
            .read()
            .unwrap()
            .iter()
            .find(|f| &f.id == id)
            .cloned())
    }

    async fn create(&self, firm: &NewPropFirm) -> Result<PropFirm, DomainError> {
        self.check_available()?;
        let now = Utc::now();
        let firm = PropFirm {
            id: firm.id.clone(),
            name: firm.name.clone(),
            logo_url: firm.logo_url.clone(),
            website_url: firm.website_url.clone(),
            profit_split: firm.profit_split.clone(),
            min_funding: firm.min_funding,
            max_funding: firm.max_funding,
            evaluation_fee: firm.evaluation_fee,
            rating: firm.rating,
            review_count: firm.review_count,
            is_featured: firm.is_featured,
            platforms: firm.platforms.clone(),
            affiliate_link: firm.affiliate_link.clone(),
            affiliate_code: firm.affiliate_code.clone(),
            created_at: now,
            updated_at: now,
        };
        self.firms.write().unwrap().push(firm.clone());
        Ok(firm)
    }
}
