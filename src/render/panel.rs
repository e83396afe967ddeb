//! Painting of the visible panel
//!
//! The sidebar sits on the left, tiles stack on the right. Buttons are laid
//! out as chips that wrap inside their tile; a versioned group always stays
//! on one row.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{HitMap, Palette};
use crate::dom::{attr, class, Document, Element, NodePath, Tag};

/// Width of the sidebar column
const SIDEBAR_WIDTH: u16 = 34;

/// Minimum width of a version input, brackets excluded
const INPUT_MIN_WIDTH: usize = 10;

/// Focus and edit state the painter needs
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelView<'a> {
    pub focused: Option<&'a NodePath>,
    /// Cursor (in chars) of the text input being edited
    pub edit_cursor: Option<usize>,
}

/// One control placed inside a tile, in tile-relative cells
#[derive(Debug, Clone)]
struct Chip {
    path: NodePath,
    row: u16,
    col: u16,
    spans: Vec<Span<'static>>,
    width: u16,
}

/// A laid-out tile
#[derive(Debug, Clone)]
struct TileBox {
    title: String,
    icon: Option<String>,
    /// Top row relative to the tile column
    top: u16,
    height: u16,
    chips: Vec<Chip>,
}

/// Paint the active panel into `area`
pub fn draw_panel(
    frame: &mut Frame,
    doc: &Document,
    palette: &Palette,
    view: PanelView,
    area: Rect,
    hits: &mut HitMap,
) {
    frame.render_widget(Block::default().style(palette.base()), area);

    let Some(panel_path) = doc.active_panel() else {
        let para = Paragraph::new("No bookmarks to show").style(Style::default().fg(palette.muted));
        frame.render_widget(para, area);
        return;
    };
    let Some(panel) = doc.get(&panel_path) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);

    for (i, section) in panel.children().iter().enumerate() {
        let path = panel_path.child(i);
        if section.has_class(class::SIDEBAR) {
            draw_sidebar(frame, section, &path, palette, view, chunks[0], hits);
        } else if section.has_class(class::TILES) {
            draw_tiles(frame, section, &path, palette, view, chunks[1], hits);
        }
    }
}

fn draw_sidebar(
    frame: &mut Frame,
    sidebar: &Element,
    path: &NodePath,
    palette: &Palette,
    view: PanelView,
    area: Rect,
    hits: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(palette.surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut rows = SidebarRows { area: inner, y: inner.y };

    for (i, child) in sidebar.children().iter().enumerate() {
        let child_path = path.child(i);
        let is_focused = view.focused == Some(&child_path);
        let control_style = if is_focused {
            palette.focused()
        } else {
            Style::default().fg(palette.foreground).bg(palette.field)
        };

        match child.tag {
            Tag::Icon => {
                rows.push(frame, hits, Line::from(child.text_content()), None, 0);
            }
            Tag::Heading => {
                let heading = Span::styled(
                    child.text_content(),
                    Style::default().add_modifier(Modifier::BOLD),
                );
                rows.push(frame, hits, Line::from(heading), None, 1);
            }
            Tag::Dropdown => {
                let label = child.attr(attr::LABEL).unwrap_or_default().to_string();
                rows.push(frame, hits, Line::styled(label, Style::default().fg(palette.muted)), None, 0);
                let chip = Span::styled(format!(" {:<8} ▾ ", child.value()), control_style);
                rows.push(frame, hits, Line::from(chip), Some(child_path), 1);
            }
            Tag::Toggle => {
                let mark = if child.is_checked() { "[x]" } else { "[ ]" };
                let label = child.attr(attr::LABEL_TEXT).unwrap_or_default();
                let chip = Span::styled(format!("{} {}", mark, label), control_style);
                rows.push(frame, hits, Line::from(chip), Some(child_path), 1);
            }
            _ => {}
        }
    }
}

/// Cursor over the sidebar's rows
struct SidebarRows {
    area: Rect,
    y: u16,
}

impl SidebarRows {
    fn push(
        &mut self,
        frame: &mut Frame,
        hits: &mut HitMap,
        line: Line<'static>,
        node: Option<NodePath>,
        gap: u16,
    ) {
        if self.y >= self.area.y.saturating_add(self.area.height) {
            return;
        }
        let rect = Rect::new(self.area.x, self.y, self.area.width, 1);
        if let Some(node) = node {
            let width = (line.width() as u16).min(self.area.width);
            hits.push(Rect::new(self.area.x, self.y, width, 1), node);
        }
        frame.render_widget(Paragraph::new(line), rect);
        self.y = self.y.saturating_add(1 + gap);
    }
}

fn draw_tiles(
    frame: &mut Frame,
    section: &Element,
    path: &NodePath,
    palette: &Palette,
    view: PanelView,
    area: Rect,
    hits: &mut HitMap,
) {
    let inner_width = area.width.saturating_sub(2);
    let boxes = layout_tiles(section, path, palette, view, inner_width);

    // Scroll so the tile holding the focused control is on screen
    let offset = view
        .focused
        .and_then(|focused| {
            boxes
                .iter()
                .find(|b| b.chips.iter().any(|c| &c.path == focused))
        })
        .filter(|b| b.top + b.height > area.height)
        .map(|b| b.top)
        .unwrap_or(0);

    let bottom = area.y.saturating_add(area.height);
    for tile in boxes.iter().filter(|b| b.top >= offset) {
        let top = area.y.saturating_add(tile.top - offset);
        if top >= bottom {
            break;
        }
        let height = tile.height.min(bottom - top);
        let rect = Rect::new(area.x, top, area.width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(Span::styled(
                format!(" {} ", tile.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .style(palette.surface());
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let inner_bottom = inner.y.saturating_add(inner.height);
        for chip in &tile.chips {
            let y = inner.y.saturating_add(chip.row);
            if y >= inner_bottom {
                continue;
            }
            let x = inner.x.saturating_add(chip.col);
            let width = chip.width.min(inner.width.saturating_sub(chip.col));
            let chip_rect = Rect::new(x, y, width, 1);
            frame.render_widget(Paragraph::new(Line::from(chip.spans.clone())), chip_rect);
            hits.push(chip_rect, chip.path.clone());
        }

        if let Some(icon) = &tile.icon {
            let last = inner_bottom.saturating_sub(1);
            if inner.height > 0 {
                let icon_rect = Rect::new(inner.x, last, inner.width, 1);
                let para = Paragraph::new(icon.as_str()).style(Style::default().fg(palette.muted));
                frame.render_widget(para, icon_rect);
            }
        }
    }
}

/// Place every tile and its chips in tile-column coordinates
fn layout_tiles(
    section: &Element,
    path: &NodePath,
    palette: &Palette,
    view: PanelView,
    inner_width: u16,
) -> Vec<TileBox> {
    let mut boxes = Vec::new();
    let mut top = 0u16;

    for (ti, tile) in section.children().iter().enumerate() {
        let tile_path = path.child(ti);
        let mut title = String::new();
        let mut icon = None;
        let mut chips = Vec::new();
        let mut row = 0u16;
        let mut col = 0u16;

        for (ci, child) in tile.children().iter().enumerate() {
            let child_path = tile_path.child(ci);
            match child.tag {
                Tag::Heading => title = child.text_content(),
                Tag::Icon => icon = Some(child.text_content()),
                Tag::ButtonRow => {
                    for (bi, item) in child.children().iter().enumerate() {
                        let item_path = child_path.child(bi);
                        let group = chip_group(item, &item_path, palette, view);
                        let group_width: u16 =
                            group.iter().map(|c| c.width + 1).sum::<u16>().saturating_sub(1);
                        if col > 0 && col + group_width > inner_width {
                            row += 1;
                            col = 0;
                        }
                        for mut chip in group {
                            chip.row = row;
                            chip.col = col;
                            col = col.saturating_add(chip.width + 1);
                            chips.push(chip);
                        }
                    }
                }
                _ => {}
            }
        }

        let button_rows = if chips.is_empty() { 0 } else { row + 1 };
        let icon_rows = u16::from(icon.is_some());
        let height = (button_rows + icon_rows).max(1) + 2;
        boxes.push(TileBox {
            title,
            icon,
            top,
            height,
            chips,
        });
        top = top.saturating_add(height);
    }
    boxes
}

/// Chips for one button-row entry: a button, or the three parts of a group
fn chip_group(item: &Element, path: &NodePath, palette: &Palette, view: PanelView) -> Vec<Chip> {
    match item.tag {
        Tag::Button => vec![button_chip(item, path.clone(), palette, view)],
        Tag::VersionedGroup => item
            .children()
            .iter()
            .enumerate()
            .filter_map(|(i, part)| {
                let part_path = path.child(i);
                match part.tag {
                    Tag::Button => Some(button_chip(part, part_path, palette, view)),
                    Tag::TextInput => Some(input_chip(part, part_path, palette, view)),
                    _ => None,
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn button_chip(button: &Element, path: NodePath, palette: &Palette, view: PanelView) -> Chip {
    let style = if view.focused == Some(&path) {
        palette.focused()
    } else {
        palette.button(button.attr(attr::KIND).unwrap_or_default())
    };
    let span = Span::styled(format!(" {} ", button.text_content().trim()), style);
    chip(path, vec![span])
}

fn input_chip(input: &Element, path: NodePath, palette: &Palette, view: PanelView) -> Chip {
    let is_focused = view.focused == Some(&path);
    let frame_style = if is_focused {
        palette.focused()
    } else {
        Style::default().fg(palette.muted).bg(palette.field)
    };
    let text_style = Style::default().fg(palette.foreground).bg(palette.field);

    let value = input.value();
    let mut spans = vec![Span::styled("[", frame_style)];
    let shown = match view.edit_cursor.filter(|_| is_focused) {
        Some(cursor) => {
            let before: String = value.chars().take(cursor).collect();
            let at: String = value.chars().skip(cursor).take(1).collect();
            let after: String = value.chars().skip(cursor + 1).collect();
            let at = if at.is_empty() { " ".to_string() } else { at };
            let width = before.chars().count() + 1 + after.chars().count();
            spans.push(Span::styled(before, text_style));
            spans.push(Span::styled(at, text_style.add_modifier(Modifier::REVERSED)));
            spans.push(Span::styled(after, text_style));
            width
        }
        None if value.is_empty() => {
            let placeholder = input.attr(attr::PLACEHOLDER).unwrap_or_default().to_string();
            let width = placeholder.chars().count();
            spans.push(Span::styled(placeholder, Style::default().fg(palette.muted).bg(palette.field)));
            width
        }
        None => {
            spans.push(Span::styled(value.to_string(), text_style));
            value.chars().count()
        }
    };
    if shown < INPUT_MIN_WIDTH {
        spans.push(Span::styled(" ".repeat(INPUT_MIN_WIDTH - shown), text_style));
    }
    spans.push(Span::styled("]", frame_style));
    chip(path, spans)
}

fn chip(path: NodePath, spans: Vec<Span<'static>>) -> Chip {
    let width = spans.iter().map(|s| s.width()).sum::<usize>() as u16;
    Chip {
        path,
        row: 0,
        col: 0,
        spans,
        width,
    }
}
