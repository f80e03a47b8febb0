//! Top-level router configuration for both services.
//!
//! # Route Structure
//!
//! Account service:
//! - `GET  /health`          - Health check (database)
//! - `/api/v1/accounts*`     - Account API
//!
//! Record service:
//! - `GET  /health`          - Health check (database)
//! - `/api/v1/records*`      - Record API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, see [`normalize`]

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::{AccountState, RecordState};
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// API version prefix shared by both services.
pub const API_PREFIX: &str = "/api/v1";

/// Constructs the account service router.
pub fn account_router(state: AccountState) -> Router {
    Router::new()
        .route("/health", get(health_handler::<AccountState>))
        .nest(API_PREFIX, api::routes::account_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the record service router.
pub fn record_router(state: RecordState) -> Router {
    Router::new()
        .route("/health", get(health_handler::<RecordState>))
        .nest(API_PREFIX, api::routes::record_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps a router so `/api/v1/records/` is served as `/api/v1/records`.
///
/// Must be applied outside the router, since routing happens before any
/// layer added with [`Router::layer`] could rewrite the path.
pub fn normalize(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
