//! Bottom line: typed command, delete prompt or last message

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{CommandLineState, CommandMode};
use crate::theme::Theme;

const HINT: &str = "Press : for commands, ? for help";

/// Draw the command line
pub fn draw(frame: &mut Frame, area: Rect, state: &CommandLineState, theme: &Theme) {
    let line = match state.mode {
        CommandMode::Command => {
            let style = Style::default().fg(theme.accent_primary);
            // Cursor index is shifted by the ':' prefix
            with_cursor(&format!(":{}", state.input), state.cursor + 1, style, theme)
        }
        CommandMode::ConfirmDelete => {
            let style = Style::default().fg(theme.warning).add_modifier(Modifier::BOLD);
            Line::from(Span::styled(state.message.clone().unwrap_or_default(), style))
        }
        CommandMode::Normal => match &state.message {
            Some(msg) if state.is_error => {
                Line::from(Span::styled(msg.clone(), Style::default().fg(theme.error)))
            }
            Some(msg) => Line::from(Span::styled(msg.clone(), Style::default().fg(theme.success))),
            None => Line::from(Span::styled(HINT, Style::default().fg(theme.fg_muted))),
        },
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Split `text` around the character at `at`, highlighting it as the cursor
fn with_cursor(text: &str, at: usize, style: Style, theme: &Theme) -> Line<'static> {
    let cursor_style =
        Style::default().fg(theme.bg_primary).bg(theme.cursor).add_modifier(Modifier::BOLD);

    let before: String = text.chars().take(at).collect();
    let under = text.chars().nth(at).unwrap_or(' ');
    let after: String = text.chars().skip(at + 1).collect();

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::styled(before, style));
    }
    spans.push(Span::styled(under.to_string(), cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after, style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_at_start() {
        let line = with_cursor(":add", 0, Style::default(), &Theme::default());
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, ":");
    }

    #[test]
    fn cursor_past_end_is_a_space() {
        let line = with_cursor(":add", 4, Style::default(), &Theme::default());
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].content, " ");
    }

    #[test]
    fn cursor_on_multibyte_text() {
        let line = with_cursor(":add 사과", 5, Style::default(), &Theme::default());
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, "사");
        assert_eq!(line.spans[2].content, "과");
    }
}
