//! Flashcard entity model.

use flashdeck_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A card row from the `flashcards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Flashcard {
    pub id: DbId,
    pub set_id: DbId,
    pub term: String,
    pub definition: String,
    pub created_at: Timestamp,
}
