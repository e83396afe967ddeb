//! Help popup

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::status::centered_rect;
use super::Palette;
use crate::core::{AppState, ViewMode};

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )])
}

/// Render help popup overlay
pub fn draw_help_popup(frame: &mut Frame, state: &AppState, palette: &Palette) {
    if !matches!(state.mode, ViewMode::Help) {
        return;
    }

    let help_lines = vec![
        section("Tabs"),
        Line::from("  h/l \u{2190}/\u{2192}  Previous/next tab"),
        Line::from("  Tab/S-Tab  Next/previous tab"),
        Line::from("  1-9        Jump to tab"),
        Line::from(""),
        section("Panel"),
        Line::from("  j/k \u{2193}/\u{2191}  Move focus"),
        Line::from("  Enter      Activate control"),
        Line::from("  Space      Activate control"),
        Line::from("  t          Choose theme"),
        Line::from("  y          Copy link URL"),
        Line::from(""),
        section("Version input"),
        Line::from("  Enter      Apply"),
        Line::from("  Esc        Discard edit"),
        Line::from(""),
        section("Other"),
        Line::from("  ?          Toggle help"),
        Line::from("  q/Esc      Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Press ? or Esc to close",
            Style::default().fg(palette.muted),
        )]),
    ];

    let height = (help_lines.len() + 2) as u16;
    let area = centered_rect(50, height, frame.area());

    let popup = Paragraph::new(help_lines).style(palette.surface()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(palette.accent)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
