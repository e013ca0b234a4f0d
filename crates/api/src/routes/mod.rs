pub mod flashcards;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                          service and database health
///
/// /flashcards/generate             generate draft cards from a topic (POST)
/// /flashcards/parse                parse pasted lines into draft cards (POST)
/// /flashcards/save                 store a set with its cards (POST)
/// /flashcards/sets                 list sets with card counts
/// /flashcards/sets/{id}            get, rename, delete
/// /flashcards/cards/{id}           update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/flashcards", flashcards::router())
}
