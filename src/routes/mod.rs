//! HTTP route handlers.
//!
//! Responses are never cacheable and `/sum` bodies have no size limit. Request
//! tracing is enabled via middleware that generates a unique request ID for each
//! incoming request, and handler panics are converted into JSON 500 responses.

pub mod ping;
pub mod sum;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::{
    catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::error::panic_response;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and middleware.
pub fn create_router() -> Router {
    Router::new()
        .route("/ping", get(ping::ping))
        // Sum bodies are not size-capped; only `a` and `b` are looked at
        .route("/sum", post(sum::sum).layer(DefaultBodyLimit::disable()))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Panic recovery - inside the request span so the failure is logged with its id
        .layer(CatchPanicLayer::custom(panic_response))
        // HTTP-level tracing (tower_http target) - nested in the request span
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
