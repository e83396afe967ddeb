//! Status bar and popup rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::Palette;
use crate::core::{AppState, ViewMode};
use crate::dom::{attr, class, Document, Tag};

/// Render the status bar
pub fn draw_status_bar(
    frame: &mut Frame,
    state: &AppState,
    doc: &Document,
    palette: &Palette,
    area: Rect,
) {
    let style = Style::default().fg(palette.status_fg).bg(palette.status_bg);

    // Right: link policy of the visible panel, theme, clock
    let links = active_links_label(doc);
    let mut right = format!("{} | {}", links, doc.theme());
    if let Some(clock) = &state.clock {
        right.push_str(" | ");
        right.push_str(clock);
    }
    right.push(' ');
    let right_width = (right.chars().count() as u16).min(area.width);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    let message = state.message.as_deref().unwrap_or("? for help");
    let hint = match state.mode {
        ViewMode::Input { .. } => " Enter: apply  Esc: cancel ",
        ViewMode::ThemePicker { .. } => " Enter: apply  Esc: close ",
        _ => "",
    };
    let left = Line::from(vec![
        Span::raw(format!(" {}", message)),
        Span::styled(hint, style.add_modifier(Modifier::DIM)),
    ]);
    frame.render_widget(Paragraph::new(left).style(style), chunks[0]);
    frame.render_widget(Paragraph::new(right).style(style), chunks[1]);
}

/// Link policy shown for the visible panel
pub fn active_links_label(doc: &Document) -> &'static str {
    let checked = doc.active_panel().and_then(|panel| {
        doc.descendants_with_class(&panel, class::LINK_TOGGLE)
            .first()
            .and_then(|p| doc.get(p))
            .map(|toggle| toggle.is_checked())
    });
    match checked {
        Some(true) => "links: new tab",
        Some(false) => "links: same tab",
        None => "links: --",
    }
}

/// Render the theme picker popup when open
pub fn draw_theme_picker(frame: &mut Frame, state: &AppState, doc: &Document, palette: &Palette) {
    let ViewMode::ThemePicker { source, selected } = &state.mode else {
        return;
    };
    let Some(dropdown) = doc.get(source) else {
        return;
    };

    let current = dropdown.value();
    let items: Vec<ListItem> = dropdown
        .children()
        .iter()
        .filter(|item| item.tag == Tag::DropdownItem)
        .map(|item| {
            let value = item.attr(attr::VALUE).unwrap_or_default();
            let marker = if value == current { "● " } else { "  " };
            ListItem::new(format!("{}{}", marker, item.text_content()))
        })
        .collect();

    let title = format!(" {} ", dropdown.attr(attr::LABEL).unwrap_or("Select"));
    let height = items.len() as u16 + 2;
    let area = centered_rect(30, height, frame.area());

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(palette.surface())
        .highlight_style(palette.focused());
    let mut list_state = ListState::default().with_selected(Some(*selected));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Create a centered rectangle
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LinksTarget, Tab, ThemeId};
    use crate::render::engine::render_all;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_links_label_follows_toggle() {
        let mut tab = Tab::new("t1", "One");
        tab.links_target = LinksTarget::Blank;
        let mut doc = Document::new();
        assert_eq!(active_links_label(&doc), "links: --");

        render_all(&mut doc, &[tab], ThemeId::White);
        assert_eq!(active_links_label(&doc), "links: new tab");

        let toggle = doc.query_class(class::LINK_TOGGLE)[0].clone();
        if let Some(el) = doc.get_mut(&toggle) {
            el.set_checked(false);
        }
        assert_eq!(active_links_label(&doc), "links: same tab");
    }

    #[test]
    fn test_status_bar_shows_message_and_clock() {
        let mut doc = Document::new();
        render_all(&mut doc, &[Tab::new("t1", "One")], ThemeId::G90);
        doc.set_theme_class(ThemeId::G90);

        let mut state = AppState::new();
        state.set_message("Opened");
        state.clock = Some("Monday | March 02 | 09:05 AM".to_string());

        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        let palette = Palette::for_theme(ThemeId::G90);
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_status_bar(frame, &state, &doc, &palette, area);
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Opened"));
        assert!(text.contains("g90"));
        assert!(text.contains("March 02"));
    }

    #[test]
    fn test_theme_picker_lists_items() {
        let mut doc = Document::new();
        render_all(&mut doc, &[Tab::new("t1", "One")], ThemeId::G10);
        let source = doc.query_class(class::THEME_SELECTOR)[0].clone();

        let mut state = AppState::new();
        state.mode = ViewMode::ThemePicker {
            source,
            selected: 1,
        };

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let palette = Palette::for_theme(ThemeId::G10);
        terminal
            .draw(|frame| draw_theme_picker(frame, &state, &doc, &palette))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Theme"));
        assert!(text.contains("g100"));
        assert!(text.contains("● g10"));
    }
}
