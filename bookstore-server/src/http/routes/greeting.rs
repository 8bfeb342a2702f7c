//! Greeting endpoints - the only plain-text routes

use axum::{routing::get, Router};

/// GET /greet
async fn greet() -> &'static str {
    "📚 Welcome to the Bookstore!"
}

/// GET /ping
async fn ping() -> &'static str {
    "👋 Hello from the Bookstore!"
}

/// Greeting routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/greet", get(greet))
        .route("/ping", get(ping))
}
