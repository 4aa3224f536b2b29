//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/*`  - Profile and health endpoints
//! - anything else - Static files from the configured directory
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the routes and tracing layer without path normalization.
///
/// Exposed separately so tests can mount it directly.
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .nest("/api", api::routes::api_routes())
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served for every non-API path
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
