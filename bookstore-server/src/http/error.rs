//! API error types with IntoResponse
//!
//! Three error kinds, each mapped directly to an HTTP status with no
//! retry or recovery. Bodies are plain text: the fixed "Book not found"
//! string for 404, the underlying error text otherwise.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;
use crate::models::ValidationError;

/// Fixed body for missing books.
const BOOK_NOT_FOUND: &str = "Book not found";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be decoded (400)
    Malformed { message: String },

    /// Path parameter failed validation (400)
    Validation(ValidationError),

    /// Book does not exist (404)
    NotFound,

    /// Database error (500, logged, surfaced verbatim)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Malformed { message } => (StatusCode::BAD_REQUEST, message),
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::NotFound => (StatusCode::NOT_FOUND, BOOK_NOT_FOUND.to_owned()),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound,
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn malformed_is_400() {
        let err = ApiError::Malformed {
            message: "expected value at line 1".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn validation_is_400() {
        let err = ApiError::Validation(ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_404_with_fixed_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Book not found");
    }

    #[tokio::test]
    async fn db_not_found_maps_to_404() {
        let err: ApiError = DbError::NotFound { id: 7 }.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn db_failure_is_500_with_error_text() {
        let err: ApiError = DbError::Sqlx(sqlx::Error::PoolClosed).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with("database error:"));
    }
}
