//! Application state and event handling

pub mod actions;
pub mod command;
pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::speech::{Speaker, speaker_from_config};
use crate::storage::KeyValueStore;
use crate::study::Study;
use crate::theme::Theme;
use crate::ui;
use input::key_with_modifier_to_action;
use state::{AppState, CommandMode, Screen};

/// The main application
pub struct App<S: KeyValueStore> {
    /// Application configuration
    config: Config,

    /// Active color theme
    theme: Theme,

    /// Deck and view state
    study: Study<S>,

    /// UI state around the deck
    state: AppState,

    /// Pronunciation backend
    speaker: Box<dyn Speaker>,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new application instance
    pub fn new(config: Config, study: Study<S>) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let theme = config.active_theme();
        let speaker = speaker_from_config(config.speech_command.as_deref());

        let mut state = AppState::default();
        if let Some(warning) = study.persistence_warning() {
            state.command_line.set_error(warning.to_string());
        }

        Ok(Self { config, theme, study, state, speaker, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        while !self.state.should_quit {
            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.study, &self.state, &self.theme);
            })?;

            // Handle events
            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Route a key press according to the command line mode
    fn handle_key(&mut self, key: KeyEvent) {
        let speaker = &mut *self.speaker;

        match self.state.command_line.mode {
            CommandMode::Command => {
                let cl = &mut self.state.command_line;
                match key.code {
                    KeyCode::Enter => {
                        let input = cl.input.clone();
                        cl.add_to_history(input.clone());
                        cl.exit_input_mode();
                        actions::run_command(&input, &mut self.study, &mut self.state, speaker);
                    }
                    KeyCode::Esc => cl.exit_input_mode(),
                    KeyCode::Backspace => cl.delete_char(),
                    KeyCode::Delete => cl.delete_char_forward(),
                    KeyCode::Left => cl.move_left(),
                    KeyCode::Right => cl.move_right(),
                    KeyCode::Home => cl.move_start(),
                    KeyCode::End => cl.move_end(),
                    KeyCode::Up => cl.history_up(),
                    KeyCode::Down => cl.history_down(),
                    KeyCode::Char(c) => cl.insert_char(c),
                    _ => {}
                }
            }
            CommandMode::ConfirmDelete => {
                let confirmed = matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'));
                actions::confirm_delete(confirmed, &mut self.study, &mut self.state);
            }
            CommandMode::Normal => {
                match key_with_modifier_to_action(key.code, key.modifiers, self.config.vim_mode) {
                    Some(action) => {
                        actions::perform(action, &mut self.study, &mut self.state, speaker)
                    }
                    None if self.state.screen == Screen::Help => self.state.screen = Screen::Study,
                    None => {}
                }
            }
        }

        if let Some(warning) = self.study.persistence_warning() {
            if self.state.command_line.message.is_none() {
                self.state.command_line.set_error(warning.to_string());
            }
        }
    }
}

impl<S: KeyValueStore> Drop for App<S> {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
