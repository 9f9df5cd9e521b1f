//! Applying key actions and commands to the study session

use super::command::{Command, ParseResult, escape_side, parse_command};
use super::input::Action;
use super::state::{AppState, CommandMode, Screen};
use crate::error::StudyError;
use crate::speech::Speaker;
use crate::storage::KeyValueStore;
use crate::study::Study;
use crate::view::{Mode, Side};

/// Apply a normal-mode action
pub fn perform<S: KeyValueStore>(
    action: Action,
    study: &mut Study<S>,
    state: &mut AppState,
    speaker: &mut dyn Speaker,
) {
    // Any key just closes the help overlay
    if state.screen == Screen::Help {
        state.screen = Screen::Study;
        return;
    }

    let cl = &mut state.command_line;
    cl.clear_message();

    match action {
        Action::Next => {
            study.next();
        }
        Action::Prev => {
            study.prev();
        }
        Action::GeneralMode => study.set_mode(Mode::General),
        Action::FavoritesMode => study.set_mode(Mode::Favorites),
        Action::RevealFront => study.reveal_once(Side::Front),
        Action::RevealBack => study.reveal_once(Side::Back),
        Action::FlipDirection => study.set_reveal_direction(study.direction().flipped()),
        Action::ToggleFavorite => report(study.toggle_favorite_current().map(|_| ()), state, None),
        Action::Speak => speak(study, state, speaker),
        Action::Add => cl.enter_command_mode_with("add "),
        Action::Edit => match study.current_card() {
            Some(card) => {
                let prefill =
                    format!("edit {} | {}", escape_side(&card.front), escape_side(&card.back));
                cl.enter_command_mode_with(&prefill);
            }
            None => cl.set_error("No card to edit."),
        },
        Action::Delete => match study.current_card() {
            Some(card) => {
                let prompt = format!("Delete this card? {} - {}  (y/n)", card.front, card.back);
                cl.enter_confirm_delete(prompt);
            }
            None => cl.set_error("No card to delete."),
        },
        Action::Command => cl.enter_command_mode(),
        Action::Help => state.screen = Screen::Help,
        Action::Back | Action::Quit => state.should_quit = true,
    }
}

/// Parse and run a command typed on the command line
pub fn run_command<S: KeyValueStore>(
    input: &str,
    study: &mut Study<S>,
    state: &mut AppState,
    speaker: &mut dyn Speaker,
) {
    let command = match parse_command(input) {
        ParseResult::Ok(command) => command,
        ParseResult::UnknownCommand(cmd) => {
            state.command_line.set_error(format!("Unknown command: {}", cmd));
            return;
        }
        ParseResult::MissingArgument(cmd) => {
            let usage = match cmd.as_str() {
                "add" | "edit" => format!("Usage: {} <front> | <back>", cmd),
                other => format!("{} needs an argument", other),
            };
            state.command_line.set_error(usage);
            return;
        }
        ParseResult::InvalidArgument { command, argument } => {
            state.command_line.set_error(format!("{}: invalid argument {:?}", command, argument));
            return;
        }
    };

    execute(command, study, state, speaker);
}

/// Run a parsed command
pub fn execute<S: KeyValueStore>(
    command: Command,
    study: &mut Study<S>,
    state: &mut AppState,
    speaker: &mut dyn Speaker,
) {
    match command {
        Command::Add { front, back } => {
            report(study.add(&front, &back).map(|_| ()), state, Some("Card added!"))
        }
        Command::Edit { front, back } => {
            report(study.edit_current(&front, &back), state, Some("Card updated!"))
        }
        Command::Delete => perform(Action::Delete, study, state, speaker),
        Command::Favorite => perform(Action::ToggleFavorite, study, state, speaker),
        Command::Mode(mode) => study.set_mode(mode),
        Command::Direction(direction) => study.set_reveal_direction(direction),
        Command::Reveal(side) => study.reveal_once(side),
        Command::Next => {
            study.next();
        }
        Command::Prev => {
            study.prev();
        }
        Command::Speak => speak(study, state, speaker),
        Command::Quit => state.should_quit = true,
        Command::Help => state.screen = Screen::Help,
        Command::Nop => state.command_line.clear_message(),
    }
}

/// Answer the y/n delete prompt
pub fn confirm_delete<S: KeyValueStore>(
    confirmed: bool,
    study: &mut Study<S>,
    state: &mut AppState,
) {
    debug_assert_eq!(state.command_line.mode, CommandMode::ConfirmDelete);
    state.command_line.exit_input_mode();

    if confirmed {
        report(study.delete_current().map(|_| ()), state, Some("Card deleted."));
    } else {
        state.command_line.set_message("Delete cancelled.");
    }
}

fn speak<S: KeyValueStore>(study: &Study<S>, state: &mut AppState, speaker: &mut dyn Speaker) {
    let Some(card) = study.current_card() else {
        state.command_line.set_error("No card to speak.");
        return;
    };
    if let Err(e) = speaker.speak(&card.front) {
        tracing::warn!("Speech failed: {}", e);
        state.command_line.set_error(e.to_string());
    }
}

fn report(result: Result<(), StudyError>, state: &mut AppState, success: Option<&str>) {
    match result {
        Ok(()) => {
            if let Some(msg) = success {
                state.command_line.set_message(msg);
            }
        }
        Err(e) => {
            if !e.is_user_error() {
                tracing::warn!("Card action failed: {}", e);
            }
            state.command_line.set_error(e.to_string());
        }
    }
}
