//! Per-request spans for the blog API.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Wraps every request to `/health` and `/api/*` in an `INFO` span.
///
/// The span carries method, path and HTTP version; the response line adds the
/// status and latency in milliseconds. 5xx responses are also reported at
/// `ERROR` so a failing catalog query stands out in JSON logs.
///
/// ```text
/// INFO request{method=PUT uri=/api/blogs/4 version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// ERROR request{method=GET uri=/api/stats version=HTTP/1.1}: response failed classification=Status code: 500 Internal Server Error latency=9 ms
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
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
