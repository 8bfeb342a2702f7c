//! bookstore-server: HTTP CRUD service for a single books table
//!
//! Maps six HTTP operations onto four SQL statement shapes. The database
//! is the sole source of truth; the service holds no state between
//! requests beyond the connection pool.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, BookRepo, DbError};
pub use http::{run_server, ApiError, ServerConfig};
pub use models::{Book, BookPayload};
