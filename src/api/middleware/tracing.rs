//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request carrying the method, path and HTTP
/// version, and logs the status code with latency in milliseconds once the
/// response is written.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/api/products/1 version=HTTP/1.1}: Processing request
/// INFO request{method=GET uri=/api/products/1 version=HTTP/1.1}: Response 200 OK in 2ms
/// ```
///
/// The latency line is also the quickest way to see the cache working: a
/// cache hit answers in milliseconds while a cold miss carries the full
/// store fetch time.
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
