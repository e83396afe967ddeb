//! Terminal colors for each theme

use ratatui::style::{Color, Modifier, Style};

use crate::core::ThemeId;

/// Resolved colors for painting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    /// Secondary text (placeholders, hints)
    pub muted: Color,
    pub border: Color,
    /// Tile and sidebar surface
    pub layer: Color,
    /// Active tab, primary buttons, focus ring
    pub accent: Color,
    /// Text drawn on `accent`
    pub on_accent: Color,
    pub field: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub error: Color,
}

impl Palette {
    /// Palette for `theme`
    pub fn for_theme(theme: ThemeId) -> Self {
        match theme {
            ThemeId::White => Self {
                background: Color::Rgb(0xff, 0xff, 0xff),
                foreground: Color::Rgb(0x16, 0x16, 0x16),
                muted: Color::Rgb(0x6f, 0x6f, 0x6f),
                border: Color::Rgb(0xc6, 0xc6, 0xc6),
                layer: Color::Rgb(0xf4, 0xf4, 0xf4),
                accent: Color::Rgb(0x0f, 0x62, 0xfe),
                on_accent: Color::Rgb(0xff, 0xff, 0xff),
                field: Color::Rgb(0xe0, 0xe0, 0xe0),
                status_bg: Color::Rgb(0x16, 0x16, 0x16),
                status_fg: Color::Rgb(0xf4, 0xf4, 0xf4),
                error: Color::Rgb(0xda, 0x1e, 0x28),
            },
            ThemeId::G10 => Self {
                background: Color::Rgb(0xf4, 0xf4, 0xf4),
                foreground: Color::Rgb(0x16, 0x16, 0x16),
                muted: Color::Rgb(0x6f, 0x6f, 0x6f),
                border: Color::Rgb(0xc6, 0xc6, 0xc6),
                layer: Color::Rgb(0xff, 0xff, 0xff),
                accent: Color::Rgb(0x0f, 0x62, 0xfe),
                on_accent: Color::Rgb(0xff, 0xff, 0xff),
                field: Color::Rgb(0xe8, 0xe8, 0xe8),
                status_bg: Color::Rgb(0x26, 0x26, 0x26),
                status_fg: Color::Rgb(0xf4, 0xf4, 0xf4),
                error: Color::Rgb(0xda, 0x1e, 0x28),
            },
            ThemeId::G90 => Self {
                background: Color::Rgb(0x26, 0x26, 0x26),
                foreground: Color::Rgb(0xf4, 0xf4, 0xf4),
                muted: Color::Rgb(0xa8, 0xa8, 0xa8),
                border: Color::Rgb(0x6f, 0x6f, 0x6f),
                layer: Color::Rgb(0x39, 0x39, 0x39),
                accent: Color::Rgb(0x45, 0x89, 0xff),
                on_accent: Color::Rgb(0x16, 0x16, 0x16),
                field: Color::Rgb(0x52, 0x52, 0x52),
                status_bg: Color::Rgb(0x16, 0x16, 0x16),
                status_fg: Color::Rgb(0xc6, 0xc6, 0xc6),
                error: Color::Rgb(0xff, 0x83, 0x89),
            },
            ThemeId::G100 => Self {
                background: Color::Rgb(0x16, 0x16, 0x16),
                foreground: Color::Rgb(0xf4, 0xf4, 0xf4),
                muted: Color::Rgb(0x8d, 0x8d, 0x8d),
                border: Color::Rgb(0x52, 0x52, 0x52),
                layer: Color::Rgb(0x26, 0x26, 0x26),
                accent: Color::Rgb(0x45, 0x89, 0xff),
                on_accent: Color::Rgb(0x16, 0x16, 0x16),
                field: Color::Rgb(0x39, 0x39, 0x39),
                status_bg: Color::Rgb(0x26, 0x26, 0x26),
                status_fg: Color::Rgb(0xc6, 0xc6, 0xc6),
                error: Color::Rgb(0xff, 0x83, 0x89),
            },
        }
    }

    /// Base style for the whole screen
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Style of a surface (tile, sidebar)
    pub fn surface(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.layer)
    }

    /// Style of the focused control
    pub fn focused(&self) -> Style {
        Style::default()
            .fg(self.on_accent)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of a button of the given kind
    pub fn button(&self, kind: &str) -> Style {
        match kind {
            "primary" => Style::default().fg(self.on_accent).bg(self.accent),
            "ghost" => Style::default().fg(self.accent).bg(self.layer),
            "danger" => Style::default().fg(self.on_accent).bg(self.error),
            _ => Style::default().fg(self.foreground).bg(self.field),
        }
    }
}
