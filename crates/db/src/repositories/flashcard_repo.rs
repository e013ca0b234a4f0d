//! Repository for the `flashcards` table.

use chrono::Utc;
use flashdeck_core::draft::CardContent;
use flashdeck_core::types::DbId;
use flashdeck_core::validation::validate_card;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::error::DbError;
use crate::models::flashcard::Flashcard;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, set_id, term, definition, created_at";

/// Provides CRUD operations for individual cards.
pub struct FlashcardRepo;

impl FlashcardRepo {
    /// Insert every card for `set_id` in one transaction.
    ///
    /// An empty slice is a no-op. All cards are validated up front; if any
    /// insert still fails the transaction rolls back and nothing is kept.
    pub async fn create_many(
        pool: &SqlitePool,
        set_id: DbId,
        cards: &[CardContent],
    ) -> Result<(), DbError> {
        if cards.is_empty() {
            return Ok(());
        }
        validate_all(cards)?;

        let mut tx = pool.begin().await?;
        Self::insert_many_inner(&mut tx, set_id, cards).await?;
        tx.commit().await?;

        tracing::debug!(set_id, count = cards.len(), "Inserted flashcards");
        Ok(())
    }

    /// Find a card by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Flashcard>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM flashcards WHERE id = ?");
        let card = sqlx::query_as::<_, Flashcard>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(card)
    }

    /// List the cards of a set in ascending id order.
    ///
    /// Returns an empty list when the set has no cards or does not exist.
    pub async fn list_by_set(pool: &SqlitePool, set_id: DbId) -> Result<Vec<Flashcard>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM flashcards WHERE set_id = ? ORDER BY id");
        let cards = sqlx::query_as::<_, Flashcard>(&query)
            .bind(set_id)
            .fetch_all(pool)
            .await?;
        Ok(cards)
    }

    /// Replace both faces of a card. Returns `true` if a row was updated.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        term: &str,
        definition: &str,
    ) -> Result<bool, DbError> {
        validate_card(term, definition)?;

        let result = sqlx::query("UPDATE flashcards SET term = ?, definition = ? WHERE id = ?")
            .bind(term)
            .bind(definition)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a card by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM flashcards WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// [`Self::list_by_set`] within an existing transaction.
    pub(crate) async fn list_by_set_inner(
        tx: &mut Transaction<'_, Sqlite>,
        set_id: DbId,
    ) -> Result<Vec<Flashcard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flashcards WHERE set_id = ? ORDER BY id");
        sqlx::query_as::<_, Flashcard>(&query)
            .bind(set_id)
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert cards within an existing transaction. Callers validate first.
    pub(crate) async fn insert_many_inner(
        tx: &mut Transaction<'_, Sqlite>,
        set_id: DbId,
        cards: &[CardContent],
    ) -> Result<(), sqlx::Error> {
        let now = Utc::now();
        for card in cards {
            sqlx::query(
                "INSERT INTO flashcards (set_id, term, definition, created_at) VALUES (?, ?, ?, ?)",
            )
            .bind(set_id)
            .bind(&card.term)
            .bind(&card.definition)
            .bind(now)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}

/// Validate every card of a batch before any of them is written.
pub(crate) fn validate_all(cards: &[CardContent]) -> Result<(), DbError> {
    for card in cards {
        validate_card(&card.term, &card.definition)?;
    }
    Ok(())
}
