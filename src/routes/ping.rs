//! Liveness endpoint.
//!
//! Returns 200 whenever the process can answer HTTP. Query string and body are ignored.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}

/// `GET /ping` handler.
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}
