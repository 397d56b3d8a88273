//! HTTP layer
//!
//! Axum server with request tracing, CORS, graceful shutdown, and the
//! status/body mapping the API's clients depend on.

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
