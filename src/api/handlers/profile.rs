//! Handler for the composite profile endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::entities::ProfileResult;
use crate::state::AppState;

/// Runs one aggregation and returns the envelope.
///
/// # Endpoint
///
/// `GET /api/profile` (also mounted at the legacy `GET /api/user-info`)
///
/// # Response Codes
///
/// - **200 OK**: identity resolved; individual sections may still be degraded
/// - **500 Internal Server Error**: identity resolution failed, no data
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "user": { "firstName": "Louise", "country": "France", ... },
///   "country": { "ok": true, "message": null, "currencyCode": "EUR", ... },
///   "exchange": { "ok": true, "base": "EUR", "usd": 1.08, "kzt": 510.0, ... },
///   "news": { "ok": false, "message": "NewsAPI: NEWS_API_KEY is not configured", ... },
///   "meta": { "generatedAt": "2026-10-16T08:30:00.123Z" }
/// }
/// ```
pub async fn profile_handler(State(state): State<AppState>) -> Response {
    let result = state.profile_service.run().await;

    let status = match &result {
        ProfileResult::Success(_) => StatusCode::OK,
        ProfileResult::Failure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(result)).into_response()
}
