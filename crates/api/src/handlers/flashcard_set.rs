//! Handlers for the `/sets` resource and the save action.

use axum::extract::State;
use axum::Json;
use flashdeck_core::draft::CardContent;
use flashdeck_core::error::CoreError;
use flashdeck_core::types::DbId;
use flashdeck_db::repositories::FlashcardSetRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::require_text;
use crate::response::{MessageResponse, SavedSetResponse, SetListResponse, SetResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveSetRequest {
    pub title: Option<String>,
    /// Extra fields such as the draft `id` are ignored.
    pub flashcards: Option<Vec<CardContent>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSetRequest {
    pub title: Option<String>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Flashcard set",
        id,
    })
}

/// POST /api/flashcards/save
///
/// Stores the set and its cards atomically, then returns the stored set.
pub async fn save(
    State(state): State<AppState>,
    AppJson(input): AppJson<SaveSetRequest>,
) -> AppResult<Json<SavedSetResponse>> {
    let title = require_text(input.title, "Invalid data")?;
    let flashcards = input
        .flashcards
        .ok_or_else(|| AppError::BadRequest("Invalid data".to_string()))?;

    let id = FlashcardSetRepo::create_with_cards(&state.pool, &title, &flashcards).await?;
    tracing::info!(set_id = id, cards = flashcards.len(), "Flashcard set saved");

    let set = FlashcardSetRepo::find_with_cards(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("saved set {id} could not be re-read")))?;

    Ok(Json(SavedSetResponse {
        message: "Flashcard set saved successfully",
        set,
    }))
}

/// GET /api/flashcards/sets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<SetListResponse>> {
    let sets = FlashcardSetRepo::list_with_counts(&state.pool).await?;
    Ok(Json(SetListResponse { sets }))
}

/// GET /api/flashcards/sets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<SetResponse>> {
    let set = FlashcardSetRepo::find_with_cards(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(SetResponse { set }))
}

/// PUT /api/flashcards/sets/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateSetRequest>,
) -> AppResult<Json<MessageResponse>> {
    let title = require_text(input.title, "Title is required")?;

    if !FlashcardSetRepo::update_title(&state.pool, id, &title).await? {
        return Err(not_found(id));
    }
    Ok(Json(MessageResponse::new("Flashcard set updated successfully")))
}

/// DELETE /api/flashcards/sets/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !FlashcardSetRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(set_id = id, "Flashcard set deleted");
    Ok(Json(MessageResponse::new("Flashcard set deleted successfully")))
}
