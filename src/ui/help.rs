//! Help overlay listing key bindings and commands

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::centered_rect;
use crate::theme::Theme;

const KEYS: &[(&str, &str)] = &[
    ("\u{2190} \u{2192}  h l", "previous / next card"),
    ("1  2", "reveal front / back"),
    ("d", "switch direction (A\u{2192}B, B\u{2192}A)"),
    ("f", "toggle favorite"),
    ("g  F", "all cards / favorites"),
    ("s", "speak the front"),
    ("a  e  x", "add / edit / delete card"),
    (":", "command line"),
    ("q  Esc", "quit"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":add <front> | <back>", "add a card (\\| for a literal |)"),
    (":edit <front> | <back>", "rewrite this card"),
    (":mode general|favorites", "switch mode"),
    (":dir ab|ba", "set direction"),
    (":reveal front|back", "uncover a side"),
];

/// Draw the help overlay
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let overlay_area = centered_rect(70, 80, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let heading = Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("Keys", heading))];
    lines.extend(KEYS.iter().map(|(k, d)| entry(k, d, theme)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Commands", heading)));
    lines.extend(COMMANDS.iter().map(|(k, d)| entry(k, d, theme)));
    lines.push(Line::from(""));
    let hint = Style::default().fg(theme.fg_muted);
    lines.push(Line::from(Span::styled("Press any key to close", hint)));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn entry<'a>(keys: &'a str, description: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<26}", keys), Style::default().fg(theme.fg_secondary)),
        Span::styled(description, Style::default().fg(theme.fg_muted)),
    ])
}
