//! Repository for the `flashcard_sets` table.

use chrono::Utc;
use flashdeck_core::draft::CardContent;
use flashdeck_core::types::DbId;
use flashdeck_core::validation::validate_title;
use sqlx::SqlitePool;

use crate::error::DbError;
use crate::models::flashcard_set::{FlashcardSet, FlashcardSetSummary, FlashcardSetWithCards};
use crate::repositories::flashcard_repo::{validate_all, FlashcardRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, created_at, updated_at";

/// Provides CRUD operations for flashcard sets.
pub struct FlashcardSetRepo;

impl FlashcardSetRepo {
    /// Insert a new set, returning its assigned ID.
    pub async fn create(pool: &SqlitePool, title: &str) -> Result<DbId, DbError> {
        validate_title(title)?;

        let now = Utc::now();
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO flashcard_sets (title, created_at, updated_at) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(title)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Insert a set and all of its cards in a single transaction.
    ///
    /// Readers never observe the set without its full card list.
    pub async fn create_with_cards(
        pool: &SqlitePool,
        title: &str,
        cards: &[CardContent],
    ) -> Result<DbId, DbError> {
        validate_title(title)?;
        validate_all(cards)?;

        let mut tx = pool.begin().await?;

        let now = Utc::now();
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO flashcard_sets (title, created_at, updated_at) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(title)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        FlashcardRepo::insert_many_inner(&mut tx, id, cards).await?;

        tx.commit().await?;
        tracing::debug!(set_id = id, cards = cards.len(), "Created flashcard set");
        Ok(id)
    }

    /// Find a set by its internal ID. Cards are not included.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<FlashcardSet>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM flashcard_sets WHERE id = ?");
        let set = sqlx::query_as::<_, FlashcardSet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(set)
    }

    /// Find a set and its cards. Returns `None` if the set does not exist.
    ///
    /// Both reads run in one transaction and see the same snapshot, so a
    /// concurrent delete yields either the whole set or `None`.
    pub async fn find_with_cards(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<FlashcardSetWithCards>, DbError> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM flashcard_sets WHERE id = ?");
        let Some(set) = sqlx::query_as::<_, FlashcardSet>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        let flashcards = FlashcardRepo::list_by_set_inner(&mut tx, id).await?;

        tx.commit().await?;
        Ok(Some(FlashcardSetWithCards { set, flashcards }))
    }

    /// List all sets with their card counts, most recently created first.
    pub async fn list_with_counts(pool: &SqlitePool) -> Result<Vec<FlashcardSetSummary>, DbError> {
        let sets = sqlx::query_as::<_, FlashcardSetSummary>(
            "SELECT s.id, s.title, s.created_at, s.updated_at, COUNT(f.id) AS card_count
             FROM flashcard_sets s
             LEFT JOIN flashcards f ON f.set_id = s.id
             GROUP BY s.id
             ORDER BY s.created_at DESC, s.id DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(sets)
    }

    /// Rename a set and refresh `updated_at`. Returns `true` if a row was updated.
    pub async fn update_title(pool: &SqlitePool, id: DbId, title: &str) -> Result<bool, DbError> {
        validate_title(title)?;

        let result =
            sqlx::query("UPDATE flashcard_sets SET title = ?, updated_at = ? WHERE id = ?")
                .bind(title)
                .bind(Utc::now())
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a set by ID. Returns `true` if a row was removed.
    ///
    /// Owned cards go with it through `ON DELETE CASCADE`, inside the same
    /// transaction.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, DbError> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM flashcard_sets WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
