//! View mode definitions

use crate::dom::NodePath;

/// Current view/input mode with embedded state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewMode {
    /// Normal browsing mode
    #[default]
    Browse,
    /// Editing a version text input in place
    Input {
        target: NodePath,
        /// Value before editing started, restored on cancel
        original: String,
        buffer: String,
        cursor: usize,
    },
    /// Theme dropdown opened from a theme selector
    ThemePicker { source: NodePath, selected: usize },
    /// Key binding overview
    Help,
}
