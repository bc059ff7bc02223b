//! Prop Firms API Server
//!
//! Catalog of proprietary trading firms: list, lookup by slug, and filter
//! by funding and platform criteria.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresFirmRepository;
use app::CatalogService;
use config::Config;
use domain::ports::FirmRepository;

/// Application state shared across all handlers.
///
/// The repository is constructed once at startup and handed to the
/// service here - no ambient globals.
pub struct AppState<R>
where
    R: FirmRepository,
{
    pub catalog: Arc<CatalogService<R>>,
}

impl<R: FirmRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router. Generic over the repository so tests can run the
/// full HTTP surface against an in-memory catalog.
pub fn router<R>(state: AppState<R>) -> Router
where
    R: FirmRepository + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/prop-firms", get(handlers::list_firms::<R>))
        .route("/api/v1/prop-firms/:id", get(handlers::get_firm::<R>))
        .route("/api/v1/filter-firms", post(handlers::filter_firms::<R>))
        // Allow all origins for MVP
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,propfirms_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Prop Firms API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters and services
    let firm_repo = Arc::new(PostgresFirmRepository::new(db));
    let catalog = Arc::new(CatalogService::new(firm_repo));

    let state = AppState { catalog };
    let app = router(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
