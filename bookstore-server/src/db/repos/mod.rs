//! Repository implementations for database access
//!
//! One statement per operation; conflicts and existence checks are left
//! to the database (affected-row counts, RETURNING).

pub mod books;

pub use books::{BookRepo, DbError};
