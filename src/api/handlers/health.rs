//! Handler for health check endpoint.

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::api::dto::health::HealthResponse;

/// Returns service liveness.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response
///
/// ```json
/// { "ok": true, "time": "2026-10-16T08:30:00.123Z", "version": "0.1.0" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
