//! Topic-to-flashcards generation through an external language model.
//!
//! [`CardGenerator`] is the seam the API layer depends on.
//! [`AnthropicGenerator`] is the production implementation; the prompt
//! template and response parsing live in [`prompt`] and [`parse`] so they
//! can be tested without a network.

pub mod anthropic;
pub mod error;
pub mod parse;
pub mod prompt;

use async_trait::async_trait;
use flashdeck_core::draft::DraftCard;

pub use anthropic::{AnthropicConfig, AnthropicGenerator};
pub use error::GenerationError;

/// Default number of cards requested per topic.
pub const DEFAULT_CARD_COUNT: usize = 10;

/// Turns a topic into a list of unsaved cards.
#[async_trait]
pub trait CardGenerator: Send + Sync {
    /// Generate cards for `topic`. Persists nothing.
    async fn generate(&self, topic: &str) -> Result<Vec<DraftCard>, GenerationError>;
}
