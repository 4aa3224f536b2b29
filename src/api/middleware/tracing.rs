//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates the request tracing layer.
///
/// Each request gets an `INFO` span with method, URI and version. Responses are
/// logged with status and latency in milliseconds; 5xx responses (a failed
/// identity lookup) are additionally logged at `WARN`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/api/profile version=HTTP/1.1}: finished processing request latency=412 ms status=200
/// WARN request{method=GET uri=/api/profile version=HTTP/1.1}: response failed classification=Status code: 500 latency=15003 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
