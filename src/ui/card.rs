//! Card panel: both sides of the card on screen, masked per reveal state

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::deck::Card;
use crate::storage::KeyValueStore;
use crate::study::Study;
use crate::theme::Theme;
use crate::view::Side;

/// Placeholder drawn over a hidden side
const MASK: &str = "\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}"; // ░

/// Draw the card panel
pub fn draw<S: KeyValueStore>(frame: &mut Frame, area: Rect, study: &Study<S>, theme: &Theme) {
    let card = study.current_card();

    let title = match card {
        Some(c) if c.is_favorite => " \u{2605} Card ", // ★
        Some(_) => " \u{2606} Card ",                  // ☆
        None => " Card ",
    };
    let title_style = match card {
        Some(c) if c.is_favorite => Style::default().fg(theme.favorite),
        _ => Style::default().fg(theme.fg_secondary),
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match card {
        Some(card) => draw_sides(frame, inner, study, card, theme),
        None => draw_empty(frame, inner, theme),
    }
}

fn draw_sides<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    study: &Study<S>,
    card: &Card,
    theme: &Theme,
) {
    let halves =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    draw_side(frame, halves[0], "A  term", &card.front, study.is_hidden(Side::Front), "1", theme);
    draw_side(frame, halves[1], "B  meaning", &card.back, study.is_hidden(Side::Back), "2", theme);
}

fn draw_side(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    text: &str,
    hidden: bool,
    reveal_key: &str,
    theme: &Theme,
) {
    let mut lines = vec![
        Line::from(Span::styled(label.to_string(), Style::default().fg(theme.fg_muted))),
        Line::from(""),
    ];

    lines.extend(side_lines(text, hidden, reveal_key, theme));

    let para = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

/// Lines for one side: the text, or a mask with its reveal hint
fn side_lines(text: &str, hidden: bool, reveal_key: &str, theme: &Theme) -> Vec<Line<'static>> {
    if hidden {
        vec![
            Line::from(Span::styled(MASK, Style::default().fg(theme.mask).bg(theme.bg_tertiary))),
            Line::from(Span::styled(
                format!("press {} to reveal", reveal_key),
                Style::default().fg(theme.fg_muted).add_modifier(Modifier::ITALIC),
            )),
        ]
    } else {
        vec![Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        ))]
    }
}

fn draw_empty(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No cards.",
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Add a new card with a, or check your favorites.",
            Style::default().fg(theme.fg_muted),
        )),
    ];

    let para = Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}
