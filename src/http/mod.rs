//! HTTP server module.
//!
//! Serves the router over plain HTTP and drains connections on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
