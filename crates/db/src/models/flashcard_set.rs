//! Flashcard set entity model and composite views.

use flashdeck_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::flashcard::Flashcard;

/// A set row from the `flashcard_sets` table. Cards are fetched separately.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FlashcardSet {
    pub id: DbId,
    pub title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A set together with the number of cards it owns, as listed on `/sets`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FlashcardSetSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub set: FlashcardSet,
    pub card_count: i64,
}

/// A set hydrated with its cards in ascending id order.
#[derive(Debug, Clone, Serialize)]
pub struct FlashcardSetWithCards {
    #[serde(flatten)]
    pub set: FlashcardSet,
    pub flashcards: Vec<Flashcard>,
}
