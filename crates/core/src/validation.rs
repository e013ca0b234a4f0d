//! Field validation for flashcard sets and cards.
//!
//! A value is considered empty when it contains nothing but whitespace.

use crate::error::CoreError;

/// Validate a set title: must contain at least one non-whitespace character.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    require_non_blank("Title", title)
}

/// Validate the two faces of a card.
pub fn validate_card(term: &str, definition: &str) -> Result<(), CoreError> {
    require_non_blank("Term", term)?;
    require_non_blank("Definition", definition)
}

fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
