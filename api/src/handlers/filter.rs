//! Filter handler
//!
//! POST endpoint applying caller-supplied criteria to the catalog.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::domain::entities::FilterCriteria;
use crate::domain::ports::FirmRepository;
use crate::error::AppError;
use crate::handlers::firms::FirmResponse;
use crate::AppState;

/// Request body for POST /api/v1/filter-firms
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    pub min_funding: Option<i32>,
    pub max_funding: Option<i32>,
    pub platform: Option<String>,
}

impl From<FilterRequest> for FilterCriteria {
    fn from(request: FilterRequest) -> Self {
        FilterCriteria {
            min_funding: request.min_funding,
            max_funding: request.max_funding,
            platform: request.platform,
        }
    }
}

/// Response body: matching firms in catalog order plus their count
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResponse {
    pub data: Vec<FirmResponse>,
    pub match_count: usize,
}

/// POST /api/v1/filter-firms
///
/// Filter the catalog. Invalid criteria are rejected with 400 before any
/// catalog scan; an empty match set is a normal 200.
pub async fn filter_firms<R: FirmRepository>(
    State(state): State<AppState<R>>,
    Json(request): Json<FilterRequest>,
) -> Result<Json<FilterResponse>, AppError> {
    let criteria: FilterCriteria = request.into();
    let outcome = state.catalog.filter_firms(&criteria).await?;

    Ok(Json(FilterResponse {
        data: outcome.matches.into_iter().map(FirmResponse::from).collect(),
        match_count: outcome.match_count,
    }))
}
