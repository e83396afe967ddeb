//! Rendering helpers for the event loop

use ratatui::prelude::*;

use crate::core::{AppState, ViewMode};
use crate::dom::Document;
use crate::render::{
    draw_help_popup, draw_panel, draw_status_bar, draw_tab_bar, draw_theme_picker, HitMap,
    Palette, PanelView,
};

/// Context for rendering a frame
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub doc: &'a Document,
    pub focused_path: Option<&'a crate::dom::NodePath>,
}

/// Render a complete frame and return the regions painted for mouse routing
pub fn render_frame(frame: &mut Frame, ctx: RenderContext) -> HitMap {
    let size = frame.area();
    let palette = Palette::for_theme(ctx.doc.theme());
    let mut hits = HitMap::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    draw_tab_bar(frame, ctx.doc, &palette, chunks[0], &mut hits);

    let edit_cursor = match &ctx.state.mode {
        ViewMode::Input { cursor, .. } => Some(*cursor),
        _ => None,
    };
    let view = PanelView {
        focused: ctx.focused_path,
        edit_cursor,
    };
    draw_panel(frame, ctx.doc, &palette, view, chunks[1], &mut hits);

    draw_status_bar(frame, ctx.state, ctx.doc, &palette, chunks[2]);

    // Popups paint over everything
    draw_theme_picker(frame, ctx.state, ctx.doc, &palette);
    draw_help_popup(frame, ctx.state, &palette);

    hits
}
