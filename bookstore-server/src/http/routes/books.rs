//! Book CRUD endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::BookRepo;
use crate::http::error::ApiError;
use crate::http::extractors::BookId;
use crate::http::server::AppState;
use crate::models::{Book, BookPayload};

/// Fixed response for DELETE /books/{id}
#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// Decode a JSON body, mapping any rejection to 400 with the decoder's
/// error text (axum would otherwise answer 415/422 for some shapes).
fn decode_body(payload: Result<Json<BookPayload>, JsonRejection>) -> Result<BookPayload, ApiError> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => Err(ApiError::Malformed {
            message: rejection.body_text(),
        }),
    }
}

/// GET /books - list all books
async fn list_books(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = BookRepo::new(&state.pool).list().await?;
    Ok(Json(books))
}

/// POST /books - create a new book
async fn create_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let payload = decode_body(payload)?;
    let book = BookRepo::new(&state.pool).create(payload).await?;

    Ok((StatusCode::CREATED, Json(book)))
}

/// GET /books/{id} - get a single book
async fn get_book(
    State(state): State<Arc<AppState>>,
    BookId(id): BookId,
) -> Result<Json<Book>, ApiError> {
    let book = BookRepo::new(&state.pool).get(id).await?;
    Ok(Json(book))
}

/// PUT /books/{id} - update title/author/price; the path id is authoritative
async fn update_book(
    State(state): State<Arc<AppState>>,
    BookId(id): BookId,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<Json<Book>, ApiError> {
    let payload = decode_body(payload)?;
    let book = BookRepo::new(&state.pool).update(id, payload).await?;

    Ok(Json(book))
}

/// DELETE /books/{id} - delete by id, idempotent
async fn delete_book(
    State(state): State<Arc<AppState>>,
    BookId(id): BookId,
) -> Result<Json<DeleteResponse>, ApiError> {
    BookRepo::new(&state.pool).delete(id).await?;

    Ok(Json(DeleteResponse {
        message: "Book deleted",
    }))
}

/// Book routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
}
