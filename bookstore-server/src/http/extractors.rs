//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate a numeric book id from the path.
///
/// A non-numeric id fails 400 up front instead of surfacing later as a
/// no-row lookup or a zero-defaulted echo.
pub struct BookId(pub i64);

impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        let id = raw.parse::<i64>().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            })
        })?;

        Ok(Self(id))
    }
}
