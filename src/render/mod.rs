//! Render module - Element tree generation and terminal painting

pub mod engine;
pub mod help;
pub mod hitmap;
pub mod panel;
pub mod status;
pub mod tabs;
pub mod theme;

pub use engine::{render_all, render_button, render_panel, render_tab_bar, render_tile};
pub use help::draw_help_popup;
pub use hitmap::HitMap;
pub use panel::{draw_panel, PanelView};
pub use status::{draw_status_bar, draw_theme_picker};
pub use tabs::draw_tab_bar;
pub use theme::Palette;
