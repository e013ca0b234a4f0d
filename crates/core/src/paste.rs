//! Paste-mode parser: turns `term --> definition` lines into card content.

use crate::draft::CardContent;

/// Separators in precedence order. The first one present in a line wins,
/// and the line is split at its first occurrence.
pub const SEPARATORS: [&str; 3] = ["-->", "->", ":"];

/// Parse pasted text, one card per line.
///
/// Blank lines, lines without a separator, and lines whose term or
/// definition is empty after trimming are skipped.
pub fn parse_pasted_cards(text: &str) -> Vec<CardContent> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<CardContent> {
    let separator = SEPARATORS.iter().find(|sep| line.contains(**sep))?;
    let (term, definition) = line.split_once(separator)?;
    let (term, definition) = (term.trim(), definition.trim());

    if term.is_empty() || definition.is_empty() {
        return None;
    }
    Some(CardContent::new(term, definition))
}
