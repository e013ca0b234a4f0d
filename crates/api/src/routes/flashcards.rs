//! Route definitions for the `/flashcards` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{fallback, flashcard, flashcard_set, generation};
use crate::state::AppState;

/// Routes mounted at `/flashcards`.
///
/// ```text
/// POST   /generate        -> generation::generate
/// POST   /parse           -> generation::parse
/// POST   /save            -> flashcard_set::save
/// GET    /sets            -> flashcard_set::list
/// GET    /sets/{id}       -> flashcard_set::get_by_id
/// PUT    /sets/{id}       -> flashcard_set::update
/// DELETE /sets/{id}       -> flashcard_set::delete
/// PUT    /cards/{id}      -> flashcard::update
/// DELETE /cards/{id}      -> flashcard::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generation::generate))
        .route("/parse", post(generation::parse))
        .route("/save", post(flashcard_set::save))
        .route("/sets", get(flashcard_set::list))
        .route(
            "/sets/{id}",
            get(flashcard_set::get_by_id)
                .put(flashcard_set::update)
                .delete(flashcard_set::delete),
        )
        .route(
            "/cards/{id}",
            put(flashcard::update).delete(flashcard::delete),
        )
        .method_not_allowed_fallback(fallback::method_not_allowed)
}
