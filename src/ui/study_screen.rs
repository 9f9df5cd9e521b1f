//! Main study screen: mode tabs, card panel, progress footer and command line

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{card, command_line};
use crate::app::state::AppState;
use crate::storage::KeyValueStore;
use crate::study::Study;
use crate::theme::Theme;
use crate::view::{Mode, RevealDirection};

/// Draw the study screen
pub fn draw<S: KeyValueStore>(
    frame: &mut Frame,
    study: &Study<S>,
    state: &AppState,
    theme: &Theme,
) {
    let area = frame.area();

    let [header_area, card_area, footer_area, command_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(6),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_header(frame, header_area, study, theme);
    card::draw(frame, card_area, study, theme);
    draw_footer(frame, footer_area, study, theme);
    command_line::draw(frame, command_area, &state.command_line, theme);
}

/// Mode tabs on the left, reveal direction on the right
fn draw_header<S: KeyValueStore>(frame: &mut Frame, area: Rect, study: &Study<S>, theme: &Theme) {
    let mut spans = Vec::new();
    for mode in [Mode::General, Mode::Favorites] {
        let style = if mode == study.mode() {
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary).bg(theme.bg_tertiary)
        };
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let direction = Line::from(Span::styled(
        direction_label(study.direction()),
        Style::default().fg(theme.accent_secondary),
    ))
    .right_aligned();
    frame.render_widget(Paragraph::new(direction), area);
}

/// Position, status line and storage warning
fn draw_footer<S: KeyValueStore>(frame: &mut Frame, area: Rect, study: &Study<S>, theme: &Theme) {
    let (current, total) = study.position();

    let mut spans = vec![Span::styled(
        format!(" {} / {} ", current, total),
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
    )];

    if let Some(status) = study.status() {
        spans.push(Span::styled(status.message(), Style::default().fg(theme.info)));
    }

    if let Some(warning) = study.persistence_warning() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(warning.to_string(), Style::default().fg(theme.warning)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn direction_label(direction: RevealDirection) -> &'static str {
    match direction {
        RevealDirection::FrontToBack => "A \u{2192} B ", // →
        RevealDirection::BackToFront => "B \u{2192} A ",
    }
}
