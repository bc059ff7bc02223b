//! PostgreSQL adapter for FirmRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use crate::domain::entities::{FirmId, NewPropFirm, PropFirm};
use crate::domain::ports::FirmRepository;
use crate::entity::prop_firms;
use crate::error::DomainError;

/// PostgreSQL implementation of FirmRepository
pub struct PostgresFirmRepository {
    db: DatabaseConnection,
}

impl PostgresFirmRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Connection-level failures mean the store is unreachable; everything
/// else is an unexpected storage fault.
fn map_db_err(e: DbErr) -> DomainError {
    match e {
        DbErr::Conn(err) => DomainError::StoreUnavailable(err.to_string()),
        DbErr::ConnectionAcquire(err) => DomainError::StoreUnavailable(err.to_string()),
        other => DomainError::Database(other.to_string()),
    }
}

impl From<prop_firms::Model> for PropFirm {
    fn from(m: prop_firms::Model) -> Self {
        PropFirm {
            id: FirmId::new(m.id),
            name: m.name,
            logo_url: m.logo_url,
            website_url: m.website_url,
            profit_split: m.profit_split,
            min_funding: m.min_funding,
            max_funding: m.max_funding,
            evaluation_fee: m.evaluation_fee,
            rating: m.rating,
            review_count: m.review_count,
            is_featured: m.is_featured.unwrap_or(false),
            platforms: m.platforms.unwrap_or_default(),
            affiliate_link: m.affiliate_link,
            affiliate_code: m.affiliate_code,
            created_at: m
                .created_at
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or_default(),
            updated_at: m
                .updated_at
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl FirmRepository for PostgresFirmRepository {
    async fn find_all(&self) -> Result<Vec<PropFirm>, DomainError> {
        // Primary-key order keeps the catalog iteration order stable
        // across calls, which the filter contract depends on.
        let results = prop_firms::Entity::find()
            .order_by_asc(prop_firms::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &FirmId) -> Result<Option<PropFirm>, DomainError> {
        let result = prop_firms::Entity::find_by_id(id.as_str())
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, firm: &NewPropFirm) -> Result<PropFirm, DomainError> {
        // Both timestamps get the same instant on insert; clients never
        // supply them.
        let now = Utc::now().fixed_offset();

        let model = prop_firms::ActiveModel {
            id: Set(firm.id.as_str().to_string()),
            name: Set(firm.name.clone()),
            logo_url: Set(firm.logo_url.clone()),
            website_url: Set(firm.website_url.clone()),
            profit_split: Set(firm.profit_split.clone()),
            min_funding: Set(firm.min_funding),
            max_funding: Set(firm.max_funding),
            evaluation_fee: Set(firm.evaluation_fee),
            rating: Set(firm.rating),
            review_count: Set(firm.review_count),
            is_featured: Set(Some(firm.is_featured)),
            platforms: Set(Some(firm.platforms.clone())),
            affiliate_link: Set(firm.affiliate_link.clone()),
            affiliate_code: Set(firm.affiliate_code.clone()),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
        };

        let result = model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(result.into())
    }
}
