//! Card content that has not been persisted yet.
//!
//! Freshly generated or pasted cards carry a [`DraftCardId`] so a client can
//! tell them apart in memory. Draft ids are UUIDs and never overlap with the
//! integer [`DbId`](crate::types::DbId) space assigned by storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ephemeral identifier for an unsaved card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftCardId(Uuid);

impl DraftCardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DraftCardId {
    fn default() -> Self {
        Self::new()
    }
}

/// The two faces of a card, without any identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContent {
    pub term: String,
    pub definition: String,
}

impl CardContent {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// An unsaved card as returned by generation or paste parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftCard {
    pub id: DraftCardId,
    pub term: String,
    pub definition: String,
}

impl From<CardContent> for DraftCard {
    fn from(content: CardContent) -> Self {
        Self {
            id: DraftCardId::new(),
            term: content.term,
            definition: content.definition,
        }
    }
}

/// Attach a fresh draft id to every card, preserving order.
pub fn into_drafts(cards: Vec<CardContent>) -> Vec<DraftCard> {
    cards.into_iter().map(DraftCard::from).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn drafts_get_unique_ids_and_keep_order() {
        let cards = (0..50)
            .map(|i| CardContent::new(format!("t{i}"), format!("d{i}")))
            .collect();
        let drafts = into_drafts(cards);

        let ids: HashSet<_> = drafts.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(drafts[0].term, "t0");
        assert_eq!(drafts[49].definition, "d49");
    }

    #[test]
    fn draft_id_serializes_as_uuid_string() {
        let draft = DraftCard::from(CardContent::new("A", "B"));
        let json = serde_json::to_value(&draft).unwrap();

        let id = json["id"].as_str().unwrap();
        assert_eq!(id.len(), 36);
        assert!(!json["id"].is_number());
        assert_eq!(json["term"], "A");
    }
}
