//! Normalization of raw model output into card content.
//!
//! The model is asked for a bare JSON array but frequently wraps it in a
//! markdown code fence anyway. Fences are stripped, then the remainder must
//! be a JSON array of `{ "term", "definition" }` objects with non-empty
//! strings. Anything else is a [`GenerationError::Parse`].

use std::sync::LazyLock;

use flashdeck_core::draft::CardContent;
use regex::Regex;
use serde::Deserialize;

use crate::error::GenerationError;

/// Matches opening and closing code fences, with or without a `json` tag.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```(?:json)?[ \t]*\r?\n?").expect("valid regex"));

#[derive(Debug, Deserialize)]
struct RawCard {
    term: String,
    definition: String,
}

/// Remove code-fence markers and surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    FENCE_RE.replace_all(raw.trim(), "").trim().to_string()
}

/// Parse the model's reply into at most `limit` cards, preserving order.
pub fn parse_cards(raw: &str, limit: usize) -> Result<Vec<CardContent>, GenerationError> {
    let cleaned = strip_code_fences(raw);

    let parsed: Vec<RawCard> =
        serde_json::from_str(&cleaned).map_err(|e| parse_error(e.to_string(), raw))?;

    if parsed.is_empty() {
        return Err(parse_error("response contained no flashcards", raw));
    }

    let mut cards = Vec::with_capacity(parsed.len().min(limit));
    for (index, card) in parsed.into_iter().take(limit).enumerate() {
        let term = card.term.trim();
        let definition = card.definition.trim();
        if term.is_empty() || definition.is_empty() {
            return Err(parse_error(
                format!("flashcard {index} has an empty term or definition"),
                raw,
            ));
        }
        cards.push(CardContent::new(term, definition));
    }
    Ok(cards)
}

fn parse_error(reason: impl Into<String>, raw: &str) -> GenerationError {
    GenerationError::Parse {
        reason: reason.into(),
        raw: raw.to_string(),
    }
}
