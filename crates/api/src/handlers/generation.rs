//! Handlers producing unsaved cards: model generation and paste parsing.

use axum::extract::State;
use axum::Json;
use flashdeck_core::draft::into_drafts;
use flashdeck_core::paste::parse_pasted_cards;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::require_text;
use crate::response::DraftCardsResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub topic: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: Option<String>,
}

/// POST /api/flashcards/generate
pub async fn generate(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateRequest>,
) -> AppResult<Json<DraftCardsResponse>> {
    let topic = require_text(input.topic, "Topic is required")?;

    let flashcards = state.generator.generate(&topic).await?;
    Ok(Json(DraftCardsResponse { flashcards }))
}

/// POST /api/flashcards/parse
pub async fn parse(AppJson(input): AppJson<ParseRequest>) -> AppResult<Json<DraftCardsResponse>> {
    let text = require_text(input.text, "Text is required")?;

    let cards = parse_pasted_cards(&text);
    if cards.is_empty() {
        return Err(AppError::BadRequest(
            "No valid flashcards found. Use format: \"term --> definition\"".to_string(),
        ));
    }
    Ok(Json(DraftCardsResponse {
        flashcards: into_drafts(cards),
    }))
}
