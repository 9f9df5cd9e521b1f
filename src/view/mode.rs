//! Browsing mode

use crate::deck::Card;
use crate::storage::keys;

/// Which subset of the deck is being browsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every card
    #[default]
    General,
    /// Favorited cards only
    Favorites,
}

impl Mode {
    /// Stored representation
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::General => "general",
            Mode::Favorites => "favorite",
        }
    }

    /// Parse the stored representation. Anything unrecognized is General.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("favorite") => Mode::Favorites,
            _ => Mode::General,
        }
    }

    /// Key holding this mode's cursor
    pub fn cursor_key(self) -> &'static str {
        match self {
            Mode::General => keys::GENERAL_INDEX,
            Mode::Favorites => keys::FAVORITE_INDEX,
        }
    }

    /// Whether `card` belongs to this mode's view
    pub fn includes(self, card: &Card) -> bool {
        match self {
            Mode::General => true,
            Mode::Favorites => card.is_favorite,
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Mode::General => "All cards",
            Mode::Favorites => "Favorites",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_general() {
        assert_eq!(Mode::parse(Some("favorite")), Mode::Favorites);
        assert_eq!(Mode::parse(Some("general")), Mode::General);
        assert_eq!(Mode::parse(Some("bogus")), Mode::General);
        assert_eq!(Mode::parse(None), Mode::General);
    }

    #[test]
    fn favorites_filter() {
        let mut card = Card::new("a", "b");
        assert!(Mode::General.includes(&card));
        assert!(!Mode::Favorites.includes(&card));
        card.is_favorite = true;
        assert!(Mode::Favorites.includes(&card));
    }
}
