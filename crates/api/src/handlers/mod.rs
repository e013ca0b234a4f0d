pub mod fallback;
pub mod flashcard;
pub mod flashcard_set;
pub mod generation;

use crate::error::{AppError, AppResult};

/// Unwrap a required text field, rejecting absent or blank values with `message`.
pub(crate) fn require_text(value: Option<String>, message: &str) -> AppResult<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}
