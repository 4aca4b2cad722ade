//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for actuator requests.
///
/// Spans are opened at `INFO` with method, URI and version. Responses are
/// logged at `INFO` with latency in milliseconds; server errors (for example
/// a `503` from a `DOWN` health check) are additionally logged at `WARN`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/actuator version=HTTP/1.1}: finished processing request latency=0 ms status=200
/// WARN request{method=GET uri=/actuator/health version=HTTP/1.1}: response failed classification=Status code: 503 Service Unavailable latency=1 ms
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
