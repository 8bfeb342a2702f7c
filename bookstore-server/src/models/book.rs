//! Book entity and request payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Book record as persisted and served.
///
/// `id` is server-assigned (BIGSERIAL) and immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub price: f64,
}

/// Mutable fields of a book, as accepted in request bodies.
///
/// There is no `id` field: any id a client sends is ignored by
/// construction. The path parameter is authoritative on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub price: f64,
}

impl BookPayload {
    /// Attach a server-assigned or path-supplied id.
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            price: self.price,
        }
    }
}
