//! DTOs for health check endpoint.

use serde::Serialize;

/// Liveness response. Upstream providers are not probed.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub time: String,
    pub version: String,
}
