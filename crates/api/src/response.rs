//! Shared response body types for API handlers.

use flashdeck_core::draft::DraftCard;
use flashdeck_db::models::flashcard_set::{FlashcardSetSummary, FlashcardSetWithCards};
use serde::Serialize;

/// `{ "message": ... }` acknowledgement for updates and deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Unsaved cards from `/generate` and `/parse`.
#[derive(Debug, Serialize)]
pub struct DraftCardsResponse {
    pub flashcards: Vec<DraftCard>,
}

/// Result of `/save`: the stored set with its cards.
#[derive(Debug, Serialize)]
pub struct SavedSetResponse {
    pub message: &'static str,
    pub set: FlashcardSetWithCards,
}

/// A single hydrated set.
#[derive(Debug, Serialize)]
pub struct SetResponse {
    pub set: FlashcardSetWithCards,
}

/// All sets with card counts.
#[derive(Debug, Serialize)]
pub struct SetListResponse {
    pub sets: Vec<FlashcardSetSummary>,
}
