//! API route configuration.

use crate::api::handlers::{health_handler, profile_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `GET /health`     - Liveness
/// - `GET /profile`    - Composite profile
/// - `GET /user-info`  - Legacy alias of `/profile`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/profile", get(profile_handler))
        .route("/user-info", get(profile_handler))
}
