use flashdeck_core::error::CoreError;

/// Errors returned by the repositories.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Input rejected before reaching the database.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The database itself failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
