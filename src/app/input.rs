//! Key bindings

use crossterm::event::{KeyCode, KeyModifiers};

/// Map a key in normal mode to an action
pub fn key_to_action(key: KeyCode, vim_mode: bool) -> Option<Action> {
    match key {
        KeyCode::Right | KeyCode::Char(' ') => Some(Action::Next),
        KeyCode::Left => Some(Action::Prev),
        KeyCode::Char('l') if vim_mode => Some(Action::Next),
        KeyCode::Char('h') if vim_mode => Some(Action::Prev),
        KeyCode::Char('f') => Some(Action::ToggleFavorite),
        KeyCode::Char('g') => Some(Action::GeneralMode),
        KeyCode::Char('F') => Some(Action::FavoritesMode),
        KeyCode::Char('1') => Some(Action::RevealFront),
        KeyCode::Char('2') => Some(Action::RevealBack),
        KeyCode::Char('d') => Some(Action::FlipDirection),
        KeyCode::Char('s') => Some(Action::Speak),
        KeyCode::Char('a') => Some(Action::Add),
        KeyCode::Char('e') => Some(Action::Edit),
        KeyCode::Char('x') | KeyCode::Delete => Some(Action::Delete),
        KeyCode::Char(':') => Some(Action::Command),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Key mapping with modifiers (for Ctrl combinations)
pub fn key_with_modifier_to_action(
    key: KeyCode,
    modifiers: KeyModifiers,
    vim_mode: bool,
) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('n') => Some(Action::Next),
            KeyCode::Char('p') => Some(Action::Prev),
            _ => None,
        }
    } else {
        key_to_action(key, vim_mode)
    }
}

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Next,
    Prev,

    // Modes
    GeneralMode,
    FavoritesMode,

    // Reveal
    RevealFront,
    RevealBack,
    FlipDirection,

    // Card actions
    ToggleFavorite,
    Speak,
    Add,
    Edit,
    Delete,

    // App
    Command,
    Help,
    Back,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_navigate() {
        assert_eq!(key_to_action(KeyCode::Right, false), Some(Action::Next));
        assert_eq!(key_to_action(KeyCode::Left, false), Some(Action::Prev));
    }

    #[test]
    fn vim_keys_need_vim_mode() {
        assert_eq!(key_to_action(KeyCode::Char('l'), true), Some(Action::Next));
        assert_eq!(key_to_action(KeyCode::Char('h'), true), Some(Action::Prev));
        assert_eq!(key_to_action(KeyCode::Char('l'), false), None);
    }

    #[test]
    fn reveal_keys() {
        assert_eq!(key_to_action(KeyCode::Char('1'), true), Some(Action::RevealFront));
        assert_eq!(key_to_action(KeyCode::Char('2'), true), Some(Action::RevealBack));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(key_to_action(KeyCode::Char('z'), true), None);
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL, true),
            Some(Action::Quit)
        );
    }

    #[test]
    fn no_modifier_uses_plain_keys() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('f'), KeyModifiers::NONE, true),
            Some(Action::ToggleFavorite)
        );
    }
}
