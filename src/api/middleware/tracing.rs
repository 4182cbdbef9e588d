//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request carrying method, URI and HTTP version,
/// and logs the response status with latency in milliseconds.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/api/shorturl version=HTTP/1.1}: finished processing request latency=4 ms status=200
/// INFO request{method=GET uri=/api/shorturl/1 version=HTTP/1.1}: finished processing request latency=1 ms status=302
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
