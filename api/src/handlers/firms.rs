//! Prop firm handlers
//!
//! Endpoints for listing the catalog and fetching a single firm.

use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::{FirmId, PropFirm};
use crate::domain::ports::FirmRepository;
use crate::error::AppError;
use crate::AppState;

/// Wire representation of a prop firm. camelCase to match the original
/// API consumers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmResponse {
    pub id: String,
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
    pub created_at: String,
    pub updated_at: String,
}

impl From<PropFirm> for FirmResponse {
    fn from(firm: PropFirm) -> Self {
        FirmResponse {
            id: firm.id.to_string(),
            name: firm.name,
            logo_url: firm.logo_url,
            website_url: firm.website_url,
            profit_split: firm.profit_split,
            min_funding: firm.min_funding,
            max_funding: firm.max_funding,
            evaluation_fee: firm.evaluation_fee,
            rating: firm.rating,
            review_count: firm.review_count,
            is_featured: firm.is_featured,
            platforms: firm.platforms,
            affiliate_link: firm.affiliate_link,
            affiliate_code: firm.affiliate_code,
            created_at: firm.created_at.to_rfc3339(),
            updated_at: firm.updated_at.to_rfc3339(),
        }
    }
}

/// GET /api/v1/prop-firms
///
/// List every prop firm in the catalog.
pub async fn list_firms<R: FirmRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<FirmResponse>>, AppError> {
    let firms = state.catalog.list_firms().await?;

    Ok(Json(firms.into_iter().map(FirmResponse::from).collect()))
}

/// GET /api/v1/prop-firms/:id
///
/// Get one prop firm by its slug.
pub async fn get_firm<R: FirmRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<FirmResponse>, AppError> {
    let firm = state
        .catalog
        .get_firm(&FirmId::new(id.clone()))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("prop firm '{}' not found", id)))?;

    Ok(Json(firm.into()))
}
