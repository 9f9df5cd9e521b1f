//! Authoritative card list
//!
//! `WordStore` owns the ordered list of cards and every mutation of it.
//! Each mutation validates first, applies in full, then writes the whole
//! list back before returning.

use std::collections::HashSet;

use super::model::{Card, CardId, normalize_sides};
use super::seed::seed_cards;
use crate::error::StudyError;
use crate::storage::{KeyValueStore, Persistence, keys};

/// Ordered list of cards, display order = insertion order
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    cards: Vec<Card>,
}

impl WordStore {
    /// Build a store from an explicit list
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut store = Self { cards };
        store.dedupe_ids();
        store
    }

    /// Restore the persisted list, falling back to the seed deck
    pub fn load<S: KeyValueStore>(persistence: &mut Persistence<S>) -> Self {
        let Some(raw) = persistence.get(keys::WORDS) else {
            tracing::debug!("No saved cards, using seed deck");
            return Self::from_cards(seed_cards());
        };

        match serde_json::from_str::<Vec<Card>>(&raw) {
            Ok(cards) => {
                tracing::debug!("Loaded {} cards", cards.len());
                Self::from_cards(cards)
            }
            Err(e) => {
                tracing::warn!("Saved card list is malformed ({}), using seed deck", e);
                Self::from_cards(seed_cards())
            }
        }
    }

    /// All cards in display order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by id
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Append a new unfavorited card
    pub fn add<S: KeyValueStore>(
        &mut self,
        persistence: &mut Persistence<S>,
        front: &str,
        back: &str,
    ) -> Result<CardId, StudyError> {
        let (front, back) = normalize_sides(front, back).ok_or(StudyError::Validation)?;
        let card = Card::new(front, back);
        let id = card.id;

        tracing::info!("Adding card {:?} / {:?}", card.front, card.back);
        self.cards.push(card);
        self.persist(persistence);
        Ok(id)
    }

    /// Replace the text of an existing card
    pub fn edit<S: KeyValueStore>(
        &mut self,
        persistence: &mut Persistence<S>,
        id: CardId,
        front: &str,
        back: &str,
    ) -> Result<(), StudyError> {
        let (front, back) = normalize_sides(front, back).ok_or(StudyError::Validation)?;
        let card = self.find_mut(id)?;

        tracing::info!("Editing card {}: {:?} / {:?}", id, front, back);
        card.front = front;
        card.back = back;
        self.persist(persistence);
        Ok(())
    }

    /// Remove a card, returning it
    pub fn delete<S: KeyValueStore>(
        &mut self,
        persistence: &mut Persistence<S>,
        id: CardId,
    ) -> Result<Card, StudyError> {
        let index = self.position(id)?;
        let card = self.cards.remove(index);

        tracing::info!("Deleted card {:?} / {:?}", card.front, card.back);
        self.persist(persistence);
        Ok(card)
    }

    /// Flip the favorite flag, returning the new value
    pub fn toggle_favorite<S: KeyValueStore>(
        &mut self,
        persistence: &mut Persistence<S>,
        id: CardId,
    ) -> Result<bool, StudyError> {
        let card = self.find_mut(id)?;
        card.is_favorite = !card.is_favorite;
        let favorite = card.is_favorite;

        tracing::debug!("Card {} favorite = {}", id, favorite);
        self.persist(persistence);
        Ok(favorite)
    }

    fn position(&self, id: CardId) -> Result<usize, StudyError> {
        self.cards.iter().position(|c| c.id == id).ok_or_else(|| {
            tracing::warn!("No card with id {}", id);
            StudyError::NotFound(id)
        })
    }

    fn find_mut(&mut self, id: CardId) -> Result<&mut Card, StudyError> {
        let index = self.position(id)?;
        Ok(&mut self.cards[index])
    }

    /// Write the full list through to storage
    fn persist<S: KeyValueStore>(&self, persistence: &mut Persistence<S>) {
        match serde_json::to_string(&self.cards) {
            Ok(json) => {
                if persistence.set(keys::WORDS, &json) {
                    tracing::debug!("Saved {} cards", self.cards.len());
                }
            }
            Err(e) => tracing::warn!("Failed to serialize cards: {}", e),
        }
    }

    /// Hand-edited files can repeat ids; later duplicates get fresh ones
    fn dedupe_ids(&mut self) {
        let mut seen = HashSet::new();
        for card in &mut self.cards {
            if !seen.insert(card.id) {
                card.id = CardId::new();
                seen.insert(card.id);
            }
        }
    }
}
