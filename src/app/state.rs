//! Application state definitions

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Study,
    Help,
}

/// Command line mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    /// Normal mode - command line hidden or showing status
    #[default]
    Normal,
    /// Command mode - accepting : commands
    Command,
    /// Waiting for y/n before deleting the card on screen
    ConfirmDelete,
}

/// State for the command line input
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    /// Current mode
    pub mode: CommandMode,
    /// Input buffer
    pub input: String,
    /// Cursor position in input
    pub cursor: usize,
    /// Status/error message to display (when not in input mode)
    pub message: Option<String>,
    /// Whether message is an error
    pub is_error: bool,
    /// Command history
    pub history: Vec<String>,
    /// Current history index when navigating
    pub history_index: Option<usize>,
}

impl CommandLineState {
    /// Start command mode
    pub fn enter_command_mode(&mut self) {
        self.enter_command_mode_with("");
    }

    /// Start command mode with the input pre-filled
    pub fn enter_command_mode_with(&mut self, input: &str) {
        self.mode = CommandMode::Command;
        self.input = input.to_string();
        self.cursor = self.char_count();
        self.message = None;
        self.history_index = None;
    }

    /// Ask for delete confirmation
    pub fn enter_confirm_delete(&mut self, prompt: impl Into<String>) {
        self.mode = CommandMode::ConfirmDelete;
        self.input.clear();
        self.cursor = 0;
        self.set_message(prompt);
    }

    /// Exit input mode
    pub fn exit_input_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.input.clear();
        self.cursor = 0;
    }

    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    /// Clear the message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Byte offset of the character at `char_idx`, or the end of input
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map_or(self.input.len(), |(i, _)| i)
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Backspace
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.input.remove(at);
    }

    /// Delete the character under the cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Whether a command is being typed
    pub fn is_input_mode(&self) -> bool {
        self.mode == CommandMode::Command
    }

    const MAX_HISTORY: usize = 100;

    /// Remember a submitted command, skipping blanks and repeats
    pub fn add_to_history(&mut self, cmd: String) {
        if cmd.is_empty() || self.history.last() == Some(&cmd) {
            return;
        }
        if self.history.len() == Self::MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(cmd);
    }

    /// Recall the previous command
    pub fn history_up(&mut self) {
        let index = match self.history_index {
            None if self.history.is_empty() => return,
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.recall(Some(index));
    }

    /// Recall the next command, or an empty line past the newest
    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => self.recall(Some(i + 1)),
            Some(_) => self.recall(None),
            None => {}
        }
    }

    fn recall(&mut self, index: Option<usize>) {
        self.history_index = index;
        self.input = index.and_then(|i| self.history.get(i)).cloned().unwrap_or_default();
        self.cursor = self.char_count();
    }
}

/// Full application state (everything except the deck itself)
#[derive(Debug, Default)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Command line state
    pub command_line: CommandLineState,

    /// Set once the user asked to leave
    pub should_quit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_handles_multibyte() {
        let mut cl = CommandLineState::default();
        cl.enter_command_mode();
        for c in "사과".chars() {
            cl.insert_char(c);
        }
        cl.move_left();
        cl.insert_char('x');
        assert_eq!(cl.input, "사x과");
        cl.delete_char_forward();
        assert_eq!(cl.input, "사x");
    }

    #[test]
    fn prefilled_input_puts_cursor_at_end() {
        let mut cl = CommandLineState::default();
        cl.enter_command_mode_with("edit 책 | Book");
        assert!(cl.is_input_mode());
        assert_eq!(cl.cursor, "edit 책 | Book".chars().count());
    }

    #[test]
    fn history_navigation() {
        let mut cl = CommandLineState::default();
        cl.add_to_history("mode fav".into());
        cl.add_to_history("mode fav".into());
        cl.add_to_history("dir ba".into());
        assert_eq!(cl.history.len(), 2);

        cl.history_up();
        assert_eq!(cl.input, "dir ba");
        cl.history_up();
        assert_eq!(cl.input, "mode fav");
        cl.history_down();
        assert_eq!(cl.input, "dir ba");
        cl.history_down();
        assert!(cl.input.is_empty());
    }

    #[test]
    fn confirm_delete_sets_prompt() {
        let mut cl = CommandLineState::default();
        cl.enter_confirm_delete("Delete? (y/n)");
        assert_eq!(cl.mode, CommandMode::ConfirmDelete);
        assert!(!cl.is_input_mode());
        assert_eq!(cl.message.as_deref(), Some("Delete? (y/n)"));
    }
}
