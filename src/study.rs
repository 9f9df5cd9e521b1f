//! Study session state
//!
//! `Study` owns the card list, the view state and the storage backend, and
//! is the only way the front end touches them. Every mutation of the list
//! re-derives the view and re-clamps the cursor before returning.

use crate::deck::{Card, CardId, WordStore};
use crate::error::StudyError;
use crate::storage::{KeyValueStore, Persistence};
use crate::view::{self, Mode, RevealDirection, RevealState, Side, Status, ViewState};

/// A flashcard study session over one storage backend
#[derive(Debug)]
pub struct Study<S: KeyValueStore> {
    persistence: Persistence<S>,
    words: WordStore,
    view: ViewState,
}

impl<S: KeyValueStore> Study<S> {
    /// Restore a session from `backend`
    pub fn open(backend: S) -> Self {
        let mut persistence = Persistence::new(backend);
        let words = WordStore::load(&mut persistence);
        let view = ViewState::restore(&mut persistence, words.cards());
        Self { persistence, words, view }
    }

    /// Every card in deck order
    pub fn cards(&self) -> &[Card] {
        self.words.cards()
    }

    /// The view state
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Cards visible in the active mode
    pub fn current_view(&self) -> Vec<&Card> {
        view::current_view(self.words.cards(), self.view.mode())
    }

    /// Card on screen, if any
    pub fn current_card(&self) -> Option<&Card> {
        self.view.current_card(self.words.cards())
    }

    /// Id of the card on screen
    pub fn current_id(&self) -> Result<CardId, StudyError> {
        self.current_card().map(|c| c.id).ok_or(StudyError::EmptyView)
    }

    /// Active mode
    pub fn mode(&self) -> Mode {
        self.view.mode()
    }

    /// Cursor within the active view
    pub fn cursor(&self) -> usize {
        self.view.cursor()
    }

    /// One-based position and view length, `(0, 0)` when empty
    pub fn position(&self) -> (usize, usize) {
        self.view.position(self.words.cards())
    }

    /// Boundary or empty-view status
    pub fn status(&self) -> Option<Status> {
        self.view.status()
    }

    /// Active reveal direction
    pub fn direction(&self) -> RevealDirection {
        self.view.direction()
    }

    /// Hidden flags for the card on screen
    pub fn reveal_state(&self) -> RevealState {
        self.view.reveal_state()
    }

    /// Whether `side` of the card on screen is hidden
    pub fn is_hidden(&self, side: Side) -> bool {
        self.view.is_hidden(side)
    }

    /// Warning to show when changes are no longer being saved
    pub fn persistence_warning(&self) -> Option<StudyError> {
        self.persistence.is_degraded().then_some(StudyError::PersistenceUnavailable)
    }

    /// Switch between all cards and favorites
    pub fn set_mode(&mut self, mode: Mode) {
        self.view.set_mode(&mut self.persistence, self.words.cards(), mode);
    }

    /// Advance to the next card
    pub fn next(&mut self) -> bool {
        self.view.next(&mut self.persistence, self.words.cards())
    }

    /// Go back to the previous card
    pub fn prev(&mut self) -> bool {
        self.view.prev(&mut self.persistence, self.words.cards())
    }

    /// Change which side starts hidden
    pub fn set_reveal_direction(&mut self, direction: RevealDirection) {
        self.view.set_reveal_direction(&mut self.persistence, self.words.cards(), direction);
    }

    /// Uncover one side of the card on screen
    pub fn reveal_once(&mut self, side: Side) {
        self.view.reveal_once(side);
    }

    /// Add a card and show it
    ///
    /// The new card is last in the deck, so the session switches to General
    /// mode and moves the cursor onto it.
    pub fn add(&mut self, front: &str, back: &str) -> Result<CardId, StudyError> {
        let id = self.words.add(&mut self.persistence, front, back)?;
        if self.view.mode() != Mode::General {
            self.view.set_mode(&mut self.persistence, self.words.cards(), Mode::General);
        }
        let last = self.words.len() - 1;
        self.view.jump_to(&mut self.persistence, self.words.cards(), last);
        Ok(id)
    }

    /// Replace the text of a card
    pub fn edit(&mut self, id: CardId, front: &str, back: &str) -> Result<(), StudyError> {
        self.words.edit(&mut self.persistence, id, front, back)?;
        self.view.refresh(&mut self.persistence, self.words.cards());
        Ok(())
    }

    /// Replace the text of the card on screen
    pub fn edit_current(&mut self, front: &str, back: &str) -> Result<(), StudyError> {
        let id = self.current_id()?;
        self.edit(id, front, back)
    }

    /// Delete a card
    pub fn delete(&mut self, id: CardId) -> Result<Card, StudyError> {
        let card = self.words.delete(&mut self.persistence, id)?;
        self.view.refresh(&mut self.persistence, self.words.cards());
        Ok(card)
    }

    /// Delete the card on screen
    pub fn delete_current(&mut self) -> Result<Card, StudyError> {
        let id = self.current_id()?;
        self.delete(id)
    }

    /// Flip a card's favorite flag, returning the new value
    pub fn toggle_favorite(&mut self, id: CardId) -> Result<bool, StudyError> {
        let favorite = self.words.toggle_favorite(&mut self.persistence, id)?;
        match self.view.mode() {
            // Membership of the view changed
            Mode::Favorites => self.view.refresh(&mut self.persistence, self.words.cards()),
            Mode::General => self.view.clamp(&mut self.persistence, self.words.cards()),
        }
        Ok(favorite)
    }

    /// Flip the favorite flag of the card on screen
    pub fn toggle_favorite_current(&mut self) -> Result<bool, StudyError> {
        let id = self.current_id()?;
        self.toggle_favorite(id)
    }

    /// Close the session, handing back the backend
    pub fn into_backend(self) -> S {
        self.persistence.into_backend()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;

    fn study() -> Study<MemoryStore> {
        Study::open(MemoryStore::default())
    }

    #[test]
    fn opens_on_seed_deck() {
        let study = study();
        assert_eq!(study.cards().len(), 10);
        assert_eq!(study.current_card().unwrap().front, "Apple");
        assert_eq!(study.position(), (1, 10));
        assert!(study.persistence_warning().is_none());
    }

    #[test]
    fn add_jumps_to_new_card_in_general_mode() {
        let mut study = study();
        study.toggle_favorite_current().unwrap();
        study.set_mode(Mode::Favorites);

        let id = study.add("Cat", "고양이").unwrap();

        assert_eq!(study.mode(), Mode::General);
        assert_eq!(study.current_id(), Ok(id));
        assert_eq!(study.position(), (11, 11));
        assert_eq!(study.status(), Some(Status::AtEnd));
    }

    #[test]
    fn add_blank_changes_nothing() {
        let mut study = study();
        study.next();
        assert_eq!(study.add(" ", "x"), Err(StudyError::Validation));
        assert_eq!(study.cards().len(), 10);
        assert_eq!(study.cursor(), 1);
    }

    #[test]
    fn edit_current_updates_display() {
        let mut study = study();
        study.next();
        study.reveal_once(Side::Back);

        study.edit_current("Hi", "안녕").unwrap();

        let card = study.current_card().unwrap();
        assert_eq!((card.front.as_str(), card.back.as_str()), ("Hi", "안녕"));
        assert!(study.is_hidden(Side::Back));
    }

    #[test]
    fn delete_last_card_clamps_cursor() {
        let mut study = study();
        for _ in 0..9 {
            study.next();
        }
        let removed = study.delete_current().unwrap();

        assert_eq!(removed.back, "Where is the restroom?");
        assert_eq!(study.cursor(), 8);
        assert_eq!(study.current_card().unwrap().front, "Friend");
    }

    #[test]
    fn delete_middle_card_keeps_position() {
        let mut study = study();
        study.next();
        study.next();
        study.delete_current().unwrap();

        assert_eq!(study.cursor(), 2);
        assert_eq!(study.current_card().unwrap().front, "고맙습니다");
    }

    #[test]
    fn empty_view_actions_report_empty() {
        let mut study = study();
        study.set_mode(Mode::Favorites);

        assert_eq!(study.current_id(), Err(StudyError::EmptyView));
        assert_eq!(study.toggle_favorite_current(), Err(StudyError::EmptyView));
        assert_eq!(study.delete_current().map(|c| c.id), Err(StudyError::EmptyView));
        assert_eq!(study.edit_current("a", "b"), Err(StudyError::EmptyView));
    }

    #[test]
    fn favorite_in_general_mode_keeps_reveal() {
        let mut study = study();
        study.reveal_once(Side::Back);
        assert_eq!(study.toggle_favorite_current(), Ok(true));
        assert!(!study.is_hidden(Side::Back));
        assert!(study.current_card().unwrap().is_favorite);
    }

    #[test]
    fn unfavorite_in_favorites_mode_shrinks_view() {
        let mut study = study();
        for _ in 0..3 {
            study.toggle_favorite_current().unwrap();
            study.next();
        }
        study.set_mode(Mode::Favorites);
        study.next();
        study.next();
        assert_eq!(study.position(), (3, 3));

        study.toggle_favorite_current().unwrap();
        assert_eq!(study.position(), (2, 2));
        assert_eq!(study.current_card().unwrap().front, "안녕하세요");
    }

    #[test]
    fn storage_failure_is_reported_but_session_continues() {
        let mut study = Study::open(MemoryStore::failing_writes());
        assert_eq!(study.persistence_warning(), Some(StudyError::PersistenceUnavailable));

        study.add("Cat", "고양이").unwrap();
        assert_eq!(study.cards().len(), 11);
        assert_eq!(study.current_card().unwrap().front, "Cat");
    }
}
