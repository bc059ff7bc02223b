//! Unified error types for the prop firms API
//!
//! Two layers:
//! - `DomainError`: business and storage errors raised by the core
//! - `AppError`: HTTP-facing wrapper that maps errors to responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - raised by the catalog service and repositories
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed or out-of-range filter input. Rejected before any
    /// catalog scan.
    #[error("Invalid filter criteria: {0}")]
    InvalidCriteria(String),

    /// The backing store could not be reached. Propagated as-is; retry
    /// policy belongs to the caller.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Unexpected storage fault (query error, malformed row, ...).
    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Requested identifier absent from the catalog. An expected outcome,
    /// not a fault.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::InvalidCriteria(msg)) => (
                StatusCode::BAD_REQUEST,
                "Invalid filter criteria",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::StoreUnavailable(msg)) => {
                tracing::error!("Store unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Catalog store unavailable",
                    None,
                )
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
