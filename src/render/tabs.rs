//! Tab bar painting

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{HitMap, Palette};
use crate::dom::{Container, Document, NodePath};

/// Longest header label before truncation
const MAX_LABEL_LEN: usize = 24;

/// Paint the tab headers on one line and record their regions
pub fn draw_tab_bar(
    frame: &mut Frame,
    doc: &Document,
    palette: &Palette,
    area: Rect,
    hits: &mut HitMap,
) {
    let bar = doc.container(Container::TabBar);
    let active = doc.active_tab_id();
    let root = NodePath::root(Container::TabBar);

    let mut spans = Vec::new();
    let mut x = area.x;
    for (i, header) in bar.children().iter().enumerate() {
        let is_active = header.id.as_deref().is_some_and(|id| Some(id) == active);
        let label = format!(" {} {} ", i + 1, truncate(&header.text_content(), MAX_LABEL_LEN));

        let style = if is_active {
            palette.focused()
        } else {
            Style::default().fg(palette.muted).bg(palette.layer)
        };
        let span = Span::styled(label, style);
        let width = span.width() as u16;

        let right = area.x.saturating_add(area.width);
        if x < right {
            let visible = width.min(right - x);
            hits.push(Rect::new(x, area.y, visible, 1), root.child(i));
        }
        x = x.saturating_add(width + 1);

        spans.push(span);
        spans.push(Span::raw(" "));
    }

    if spans.is_empty() {
        spans.push(Span::styled(
            " No tabs ",
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).style(palette.base());
    frame.render_widget(para, area);
}

/// Cut `s` to `max` characters, marking the cut with `...`
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
