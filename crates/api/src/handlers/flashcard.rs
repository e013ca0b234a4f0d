//! Handlers for the `/cards` resource.

use axum::extract::State;
use axum::Json;
use flashdeck_core::error::CoreError;
use flashdeck_core::types::DbId;
use flashdeck_db::repositories::FlashcardRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::require_text;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateCardRequest {
    pub term: Option<String>,
    pub definition: Option<String>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Flashcard",
        id,
    })
}

/// PUT /api/flashcards/cards/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCardRequest>,
) -> AppResult<Json<MessageResponse>> {
    const MISSING: &str = "Term and definition are required";
    let term = require_text(input.term, MISSING)?;
    let definition = require_text(input.definition, MISSING)?;

    if !FlashcardRepo::update(&state.pool, id, &term, &definition).await? {
        return Err(not_found(id));
    }
    Ok(Json(MessageResponse::new("Flashcard updated successfully")))
}

/// DELETE /api/flashcards/cards/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !FlashcardRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    Ok(Json(MessageResponse::new("Flashcard deleted successfully")))
}
