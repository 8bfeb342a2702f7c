//! Book repository
//!
//! The four SQL statement shapes behind the HTTP surface:
//! - list: SELECT all rows
//! - get: SELECT by primary key (fetch_optional -> NotFound)
//! - create: INSERT ... RETURNING (server assigns the id)
//! - update/delete: single write by primary key, affected-row count

use sqlx::PgPool;

use crate::models::{Book, BookPayload};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: book {id}")]
    NotFound { id: i64 },
}

/// Book repository
pub struct BookRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> BookRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all books in insertion order.
    ///
    /// An empty table yields an empty Vec, which serializes to `[]`.
    pub async fn list(&self) -> Result<Vec<Book>, DbError> {
        let books: Vec<Book> = sqlx::query_as(
            r#"
            SELECT id, title, author, price
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(books)
    }

    /// Get a single book by primary key.
    pub async fn get(&self, id: i64) -> Result<Book, DbError> {
        let book: Option<Book> = sqlx::query_as(
            r#"
            SELECT id, title, author, price
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        book.ok_or(DbError::NotFound { id })
    }

    /// Insert a new book, returning the row with its server-assigned id.
    pub async fn create(&self, payload: BookPayload) -> Result<Book, DbError> {
        let book: Book = sqlx::query_as(
            r#"
            INSERT INTO books (title, author, price)
            VALUES ($1, $2, $3)
            RETURNING id, title, author, price
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(payload.price)
        .fetch_one(self.pool)
        .await?;

        Ok(book)
    }

    /// Update title/author/price of an existing book. The id never changes.
    ///
    /// Returns NotFound when the affected-row count is zero.
    pub async fn update(&self, id: i64, payload: BookPayload) -> Result<Book, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $1, author = $2, price = $3
            WHERE id = $4
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(payload.price)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        Ok(payload.into_book(id))
    }

    /// Delete a book by primary key.
    ///
    /// Idempotent - returns Ok whether or not a row existed.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p bookstore-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migration failed");
        pool
    }

    fn payload(title: &str) -> BookPayload {
        BookPayload {
            title: title.to_owned(),
            author: "Test Author".to_owned(),
            price: 9.99,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_assigns_positive_id() {
        let pool = test_pool().await;
        let repo = BookRepo::new(&pool);

        let book = repo.create(payload("create_assigns_positive_id")).await.unwrap();
        assert!(book.id > 0);
        assert_eq!(book.title, "create_assigns_positive_id");
        assert_eq!(book.price, 9.99);

        repo.delete(book.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_roundtrips_created_book() {
        let pool = test_pool().await;
        let repo = BookRepo::new(&pool);

        let created = repo.create(payload("get_roundtrips")).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(created, fetched);

        repo.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = BookRepo::new(&pool);

        let err = repo.get(999_999_999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_preserves_id() {
        let pool = test_pool().await;
        let repo = BookRepo::new(&pool);

        let created = repo.create(payload("before update")).await.unwrap();
        let updated = repo
            .update(created.id, payload("after update"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "after update");

        repo.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = BookRepo::new(&pool);

        let err = repo
            .update(999_999_999, payload("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_idempotent() {
        let pool = test_pool().await;
        let repo = BookRepo::new(&pool);

        let created = repo.create(payload("delete me")).await.unwrap();
        repo.delete(created.id).await.unwrap();
        // Second delete of the same id must also succeed.
        repo.delete(created.id).await.unwrap();
    }
}
