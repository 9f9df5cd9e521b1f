//! Current view over the deck
//!
//! `ViewState` holds the browsing mode, one cursor per mode, the reveal
//! direction and the reveal flags of the card on screen. It never caches
//! the filtered view: every operation takes the authoritative card list and
//! re-derives the view, so a shrinking list can't leave the cursor dangling.

pub mod mode;
pub mod reveal;

pub use mode::Mode;
pub use reveal::{RevealDirection, RevealState, Side};

use crate::deck::Card;
use crate::storage::{KeyValueStore, Persistence, keys};

/// Cards visible in `mode`, in deck order
pub fn current_view(cards: &[Card], mode: Mode) -> Vec<&Card> {
    cards.iter().filter(|c| mode.includes(c)).collect()
}

fn view_len(cards: &[Card], mode: Mode) -> usize {
    cards.iter().filter(|c| mode.includes(c)).count()
}

/// Status line shown alongside the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Cursor is on the first card
    AtStart,
    /// Cursor is on the last card
    AtEnd,
    /// The view is empty
    NoCards,
}

impl Status {
    /// Message for the status line
    pub fn message(self) -> &'static str {
        match self {
            Status::AtStart => "This is the first card.",
            Status::AtEnd => "This is the last card.",
            Status::NoCards => "No cards.",
        }
    }
}

/// Last position per mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursors {
    pub general: usize,
    pub favorites: usize,
}

impl Cursors {
    fn get(&self, mode: Mode) -> usize {
        match mode {
            Mode::General => self.general,
            Mode::Favorites => self.favorites,
        }
    }

    fn get_mut(&mut self, mode: Mode) -> &mut usize {
        match mode {
            Mode::General => &mut self.general,
            Mode::Favorites => &mut self.favorites,
        }
    }
}

/// Mode, cursor and reveal state for the card on screen
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    mode: Mode,
    cursors: Cursors,
    direction: RevealDirection,
    reveal: RevealState,
    status: Option<Status>,
}

impl ViewState {
    /// Restore mode, cursors and direction from storage
    pub fn restore<S: KeyValueStore>(persistence: &mut Persistence<S>, cards: &[Card]) -> Self {
        let mode = Mode::parse(persistence.get(keys::LAST_MODE).as_deref());
        let cursors = Cursors {
            general: load_cursor(persistence, Mode::General),
            favorites: load_cursor(persistence, Mode::Favorites),
        };

        let direction = match persistence.get(keys::DISPLAY_MODE) {
            Some(raw) => RevealDirection::parse(&raw).unwrap_or_else(|| {
                tracing::warn!("Unknown display mode {:?}, using AB", raw);
                persistence.set(keys::DISPLAY_MODE, RevealDirection::default().as_str());
                RevealDirection::default()
            }),
            None => {
                persistence.set(keys::DISPLAY_MODE, RevealDirection::default().as_str());
                RevealDirection::default()
            }
        };

        let mut state = Self { mode, cursors, direction, ..Default::default() };
        state.refresh(persistence, cards);
        tracing::debug!("Restored view: {:?} at {}, {:?}", mode, state.cursor(), direction);
        state
    }

    /// Active mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Cursor of the active mode
    pub fn cursor(&self) -> usize {
        self.cursors.get(self.mode)
    }

    /// Both cursors
    pub fn cursors(&self) -> Cursors {
        self.cursors
    }

    /// Active reveal direction
    pub fn direction(&self) -> RevealDirection {
        self.direction
    }

    /// Hidden flags for the card on screen
    pub fn reveal_state(&self) -> RevealState {
        self.reveal
    }

    /// Whether `side` of the card on screen is hidden
    pub fn is_hidden(&self, side: Side) -> bool {
        self.reveal.is_hidden(side)
    }

    /// Boundary or empty-view status, if any
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// Card at the cursor, or `None` if the view is empty
    pub fn current_card<'a>(&self, cards: &'a [Card]) -> Option<&'a Card> {
        cards.iter().filter(|c| self.mode.includes(c)).nth(self.cursor())
    }

    /// One-based position and view length, `(0, 0)` when empty
    pub fn position(&self, cards: &[Card]) -> (usize, usize) {
        let len = view_len(cards, self.mode);
        if len == 0 { (0, 0) } else { (self.cursor() + 1, len) }
    }

    /// Switch mode and redisplay that mode's last card
    pub fn set_mode<S: KeyValueStore>(
        &mut self,
        persistence: &mut Persistence<S>,
        cards: &[Card],
        mode: Mode,
    ) {
        self.mode = mode;
        persistence.set(keys::LAST_MODE, mode.as_str());
        tracing::debug!("Mode changed to {:?}", mode);
        self.refresh(persistence, cards);
    }

    /// Move to the next card. Returns false at the end or on an empty view.
    pub fn next<S: KeyValueStore>(
        &mut self,
        persistence: &mut Persistence<S>,
        cards: &[Card],
    ) -> bool {
        let len = view_len(cards, self.mode);
        if len == 0 {
            self.status = Some(Status::NoCards);
            return false;
        }
        if self.cursor() + 1 >= len {
            self.status = Some(Status::AtEnd);
            return false;
        }
        *self.cursors.get_mut(self.mode) += 1;
        self.refresh(persistence, cards);
        true
    }

    /// Move to the previous card. Returns false at the start or on an empty view.
    pub fn prev<S: KeyValueStore>(
        &mut self,
        persistence: &mut Persistence<S>,
        cards: &[Card],
    ) -> bool {
        if view_len(cards, self.mode) == 0 {
            self.status = Some(Status::NoCards);
            return false;
        }
        if self.cursor() == 0 {
            self.status = Some(Status::AtStart);
            return false;
        }
        *self.cursors.get_mut(self.mode) -= 1;
        self.refresh(persistence, cards);
        true
    }

    /// Put the cursor on `index` of the active view (clamped) and redisplay
    pub fn jump_to<S: KeyValueStore>(
        &mut self,
        persistence: &mut Persistence<S>,
        cards: &[Card],
        index: usize,
    ) {
        *self.cursors.get_mut(self.mode) = index;
        self.refresh(persistence, cards);
    }

    /// Change the reveal direction and re-hide the card on screen
    pub fn set_reveal_direction<S: KeyValueStore>(
        &mut self,
        persistence: &mut Persistence<S>,
        cards: &[Card],
        direction: RevealDirection,
    ) {
        self.direction = direction;
        persistence.set(keys::DISPLAY_MODE, direction.as_str());
        self.reset_reveal(cards);
    }

    /// Uncover one side of the card on screen until it changes
    pub fn reveal_once(&mut self, side: Side) {
        self.reveal.reveal(side);
    }

    /// Redisplay after the list or cursor changed
    ///
    /// Clamps the active cursor into the view, persists it, recomputes the
    /// boundary status and resets the reveal flags.
    pub fn refresh<S: KeyValueStore>(&mut self, persistence: &mut Persistence<S>, cards: &[Card]) {
        self.clamp(persistence, cards);
        self.reset_reveal(cards);
    }

    /// Re-clamp without touching the reveal flags
    ///
    /// Used when the list changed but the card on screen is still the same.
    pub fn clamp<S: KeyValueStore>(&mut self, persistence: &mut Persistence<S>, cards: &[Card]) {
        let len = view_len(cards, self.mode);
        let cursor = self.cursors.get_mut(self.mode);
        *cursor = if len == 0 { 0 } else { (*cursor).min(len - 1) };
        let cursor = *cursor;

        persistence.set(self.mode.cursor_key(), &cursor.to_string());
        tracing::debug!("Cursor ({}) saved: {}", self.mode.as_str(), cursor);

        self.status = if len == 0 {
            Some(Status::NoCards)
        } else if cursor == len - 1 {
            Some(Status::AtEnd)
        } else if cursor == 0 {
            Some(Status::AtStart)
        } else {
            None
        };
    }

    fn reset_reveal(&mut self, cards: &[Card]) {
        self.reveal = if view_len(cards, self.mode) == 0 {
            RevealState::all_visible()
        } else {
            RevealState::for_direction(self.direction)
        };
    }
}

fn load_cursor<S: KeyValueStore>(persistence: &mut Persistence<S>, mode: Mode) -> usize {
    let Some(raw) = persistence.get(mode.cursor_key()) else {
        return 0;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!("Ignoring unreadable {} cursor {:?}", mode.as_str(), raw);
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::seed_cards;
    use crate::storage::MemoryStore;

    fn setup() -> (Persistence<MemoryStore>, Vec<Card>) {
        (Persistence::new(MemoryStore::default()), seed_cards())
    }

    #[test]
    fn current_view_filters_favorites_in_order() {
        let mut cards = seed_cards();
        cards[7].is_favorite = true;
        cards[2].is_favorite = true;

        let view = current_view(&cards, Mode::Favorites);
        let fronts: Vec<&str> = view.iter().map(|c| c.front.as_str()).collect();
        assert_eq!(fronts, vec!["Book", "사랑합니다"]);
        assert_eq!(current_view(&cards, Mode::General).len(), 10);
    }

    #[test]
    fn restore_defaults() {
        let (mut p, cards) = setup();
        let view = ViewState::restore(&mut p, &cards);

        assert_eq!(view.mode(), Mode::General);
        assert_eq!(view.cursor(), 0);
        assert_eq!(view.direction(), RevealDirection::FrontToBack);
        assert_eq!(view.status(), Some(Status::AtStart));
        assert_eq!(p.backend().peek(keys::DISPLAY_MODE), Some("AB"));
    }

    #[test]
    fn restore_reads_saved_state() {
        let mut backend = MemoryStore::default();
        backend.set(keys::LAST_MODE, "general").unwrap();
        backend.set(keys::GENERAL_INDEX, "4").unwrap();
        backend.set(keys::DISPLAY_MODE, "BA").unwrap();
        let mut p = Persistence::new(backend);
        let cards = seed_cards();

        let view = ViewState::restore(&mut p, &cards);
        assert_eq!(view.cursor(), 4);
        assert_eq!(view.current_card(&cards).unwrap().front, "Computer");
        assert!(view.is_hidden(Side::Front));
        assert!(!view.is_hidden(Side::Back));
    }

    #[test]
    fn restore_clamps_and_repairs() {
        let mut backend = MemoryStore::default();
        backend.set(keys::GENERAL_INDEX, "99").unwrap();
        backend.set(keys::FAVORITE_INDEX, "-3").unwrap();
        backend.set(keys::DISPLAY_MODE, "XY").unwrap();
        let mut p = Persistence::new(backend);
        let cards = seed_cards();

        let view = ViewState::restore(&mut p, &cards);
        assert_eq!(view.cursor(), 9);
        assert_eq!(view.cursors().favorites, 0);
        assert_eq!(view.status(), Some(Status::AtEnd));
        assert_eq!(p.backend().peek(keys::GENERAL_INDEX), Some("9"));
        assert_eq!(p.backend().peek(keys::DISPLAY_MODE), Some("AB"));
    }

    #[test]
    fn next_and_prev_walk_the_view() {
        let (mut p, cards) = setup();
        let mut view = ViewState::restore(&mut p, &cards);

        assert!(view.next(&mut p, &cards));
        assert_eq!(view.cursor(), 1);
        assert_eq!(view.status(), None);
        assert_eq!(p.backend().peek(keys::GENERAL_INDEX), Some("1"));

        assert!(view.prev(&mut p, &cards));
        assert_eq!(view.cursor(), 0);
        assert_eq!(view.status(), Some(Status::AtStart));
    }

    #[test]
    fn prev_at_start_is_idempotent() {
        let (mut p, cards) = setup();
        let mut view = ViewState::restore(&mut p, &cards);

        for _ in 0..3 {
            assert!(!view.prev(&mut p, &cards));
            assert_eq!(view.cursor(), 0);
            assert_eq!(view.status(), Some(Status::AtStart));
        }
    }

    #[test]
    fn next_at_end_reports_boundary() {
        let (mut p, cards) = setup();
        let mut view = ViewState::restore(&mut p, &cards);
        view.jump_to(&mut p, &cards, 9);

        assert!(!view.next(&mut p, &cards));
        assert_eq!(view.cursor(), 9);
        assert_eq!(view.status(), Some(Status::AtEnd));
    }

    #[test]
    fn navigation_on_empty_view() {
        let (mut p, cards) = setup();
        let mut view = ViewState::restore(&mut p, &cards);
        view.set_mode(&mut p, &cards, Mode::Favorites);

        assert!(!view.next(&mut p, &cards));
        assert_eq!(view.status(), Some(Status::NoCards));
        assert!(!view.prev(&mut p, &cards));
        assert_eq!(view.status(), Some(Status::NoCards));
        assert!(view.current_card(&cards).is_none());
        assert_eq!(view.position(&cards), (0, 0));
        assert_eq!(view.reveal_state(), RevealState::all_visible());
    }

    #[test]
    fn cursors_are_kept_per_mode() {
        let (mut p, mut cards) = setup();
        cards[1].is_favorite = true;
        cards[5].is_favorite = true;
        let mut view = ViewState::restore(&mut p, &cards);

        view.jump_to(&mut p, &cards, 6);
        view.set_mode(&mut p, &cards, Mode::Favorites);
        assert_eq!(view.cursor(), 0);
        view.next(&mut p, &cards);
        assert_eq!(view.current_card(&cards).unwrap().front, "죄송합니다");

        view.set_mode(&mut p, &cards, Mode::General);
        assert_eq!(view.cursor(), 6);
        assert_eq!(p.backend().peek(keys::FAVORITE_INDEX), Some("1"));
        assert_eq!(p.backend().peek(keys::GENERAL_INDEX), Some("6"));
        assert_eq!(p.backend().peek(keys::LAST_MODE), Some("general"));
    }

    #[test]
    fn reveal_resets_on_navigation() {
        let (mut p, cards) = setup();
        let mut view = ViewState::restore(&mut p, &cards);
        view.set_reveal_direction(&mut p, &cards, RevealDirection::FrontToBack);

        assert!(view.is_hidden(Side::Back));
        view.reveal_once(Side::Back);
        assert_eq!(view.reveal_state(), RevealState::all_visible());

        view.next(&mut p, &cards);
        assert!(view.is_hidden(Side::Back));
        assert!(!view.is_hidden(Side::Front));
    }

    #[test]
    fn direction_change_is_persisted() {
        let (mut p, cards) = setup();
        let mut view = ViewState::restore(&mut p, &cards);
        view.set_reveal_direction(&mut p, &cards, RevealDirection::BackToFront);

        assert_eq!(p.backend().peek(keys::DISPLAY_MODE), Some("BA"));
        assert!(view.is_hidden(Side::Front));
    }

    #[test]
    fn single_card_view_reports_end() {
        let (mut p, mut cards) = setup();
        cards.truncate(1);
        let view = ViewState::restore(&mut p, &cards);
        assert_eq!(view.status(), Some(Status::AtEnd));
        assert_eq!(view.position(&cards), (1, 1));
    }
}
