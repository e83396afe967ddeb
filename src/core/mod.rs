//! Core module - Data model, defaults and UI state

pub mod defaults;
pub mod mode;
pub mod state;
pub mod tab;
pub mod theme;

pub use mode::ViewMode;
pub use state::AppState;
pub use tab::{
    resolve_versioned_href, selected_index, with_links_target, with_selected, Button, LinksTarget,
    Tab, Tile,
};
pub use theme::ThemeId;
