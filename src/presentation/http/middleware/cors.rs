// src/presentation/http/middleware/cors.rs
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS for the single frontend origin, with credentials so the session
/// cookie travels on cross-origin `fetch` calls. Preflight `OPTIONS`
/// requests are answered here and never reach a handler.
///
/// `Access-Control-Allow-Origin` is only echoed back when the request's
/// `Origin` is the frontend.
pub fn cors_layer(frontend_origin: &str) -> CorsLayer {
    let origin = HeaderValue::from_str(frontend_origin)
        .map(|origin| AllowOrigin::list([origin]))
        .unwrap_or_else(|_| {
            tracing::warn!(origin = frontend_origin, "frontend origin is not a valid header value");
            AllowOrigin::list(std::iter::empty::<HeaderValue>())
        });

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
