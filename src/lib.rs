//! pingsum: a minimal JSON service with a liveness check and an integer sum endpoint.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::{AppError, ErrorResponse};
pub use routes::create_router;
