//! UI rendering components
//!
//! Rendering only reads from the study session; it never changes it.

pub mod card;
pub mod command_line;
pub mod help;
pub mod layout;
pub mod study_screen;

use ratatui::Frame;

use crate::app::state::{AppState, Screen};
use crate::storage::KeyValueStore;
use crate::study::Study;
use crate::theme::Theme;

/// Main draw function
pub fn draw<S: KeyValueStore>(
    frame: &mut Frame,
    study: &Study<S>,
    state: &AppState,
    theme: &Theme,
) {
    study_screen::draw(frame, study, state, theme);

    if state.screen == Screen::Help {
        help::draw(frame, frame.area(), theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::view::{Mode, Side};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(study: &Study<MemoryStore>, state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let theme = Theme::default();
        terminal.draw(|frame| draw(frame, study, state, &theme)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_front_and_masks_back() {
        let study = Study::open(MemoryStore::default());
        let screen = render(&study, &AppState::default());

        assert!(screen.contains("Apple"));
        assert!(!screen.contains("사과"));
        assert!(screen.contains("1 / 10"));
        assert!(screen.contains("This is the first card."));
    }

    #[test]
    fn renders_revealed_side() {
        let mut study = Study::open(MemoryStore::default());
        study.next();
        study.reveal_once(Side::Back);
        let screen = render(&study, &AppState::default());

        assert!(screen.contains("Hello"));
    }

    #[test]
    fn renders_empty_view() {
        let mut study = Study::open(MemoryStore::default());
        study.set_mode(Mode::Favorites);
        let screen = render(&study, &AppState::default());

        assert!(screen.contains("No cards."));
        assert!(screen.contains("0 / 0"));
    }

    #[test]
    fn renders_help_overlay() {
        let study = Study::open(MemoryStore::default());
        let state = AppState { screen: Screen::Help, ..Default::default() };
        let screen = render(&study, &state);

        assert!(screen.contains("Help"));
        assert!(screen.contains("toggle favorite"));
    }
}
