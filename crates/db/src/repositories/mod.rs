//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod flashcard_repo;
pub mod flashcard_set_repo;

pub use flashcard_repo::FlashcardRepo;
pub use flashcard_set_repo::FlashcardSetRepo;
