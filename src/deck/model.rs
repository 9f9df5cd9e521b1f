//! Card model
//!
//! A card is a front/back text pair with a favorite flag. Every card carries
//! a stable id assigned at creation, so two cards with identical text are
//! still distinct.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable opaque identifier of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl CardId {
    /// Generate a fresh id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One flashcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Identifier, assigned on load for lists saved without one
    #[serde(default)]
    pub id: CardId,

    /// Term side (side A)
    #[serde(alias = "foreign")]
    pub front: String,

    /// Definition side (side B)
    #[serde(alias = "meaning")]
    pub back: String,

    /// Whether the card shows up in Favorites mode
    #[serde(default)]
    pub is_favorite: bool,
}

impl Card {
    /// Create an unfavorited card with a fresh id
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self { id: CardId::new(), front: front.into(), back: back.into(), is_favorite: false }
    }
}

/// Trim both sides of a card, rejecting either being empty
pub fn normalize_sides(front: &str, back: &str) -> Option<(String, String)> {
    let front = front.trim();
    let back = back.trim();
    if front.is_empty() || back.is_empty() {
        return None;
    }
    Some((front.to_string(), back.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_is_not_favorite() {
        let card = Card::new("Apple", "사과");
        assert!(!card.is_favorite);
        assert_eq!(card.front, "Apple");
    }

    #[test]
    fn identical_text_gets_distinct_ids() {
        let a = Card::new("Book", "책");
        let b = Card::new("Book", "책");
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn serializes_camel_case() {
        let card = Card::new("Water", "물");
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"isFavorite\":false"));
        assert!(json.contains("\"front\":\"Water\""));
    }

    #[test]
    fn deserializes_legacy_fields() {
        let json = r#"{"foreign":"Friend","meaning":"친구","isFavorite":true}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.front, "Friend");
        assert_eq!(card.back, "친구");
        assert!(card.is_favorite);
    }

    #[test]
    fn normalize_trims_and_rejects_blank() {
        assert_eq!(normalize_sides("  a ", "b\n"), Some(("a".into(), "b".into())));
        assert_eq!(normalize_sides("   ", "b"), None);
        assert_eq!(normalize_sides("a", ""), None);
    }
}
