//! Domain models shared between the HTTP and database layers

pub mod book;
pub mod validation;

pub use book::{Book, BookPayload};
pub use validation::ValidationError;
