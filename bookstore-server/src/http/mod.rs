//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS (any origin, GET/POST/PUT/DELETE/OPTIONS)
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text error responses, JSON everywhere else

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{run_server, AppState, ServerConfig};
