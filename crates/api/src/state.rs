use std::sync::Arc;

use flashdeck_generation::CardGenerator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: flashdeck_db::DbPool,
    /// Topic-to-flashcards generator.
    pub generator: Arc<dyn CardGenerator>,
}
