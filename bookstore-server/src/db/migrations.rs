//! Bootstrap migration for the books table

use sqlx::PgPool;

/// Create the books table if it does not exist. Idempotent.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running bookstore migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id     BIGSERIAL PRIMARY KEY,
            title  TEXT NOT NULL,
            author TEXT NOT NULL,
            price  DOUBLE PRECISION NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
