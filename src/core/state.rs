//! Transient UI state
//!
//! Nothing here is persisted: focus position, popups and the status line
//! live only for the session.

use super::ViewMode;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Index into the visible panel's focusable controls
    pub focus_index: usize,
    /// Current view mode
    pub mode: ViewMode,
    /// Status message
    pub message: Option<String>,
    /// Exit flag
    pub should_quit: bool,
    /// Formatted clock text, `None` when the clock is disabled
    pub clock: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Keep focus inside `count` controls
    pub fn clamp_focus(&mut self, count: usize) {
        if count == 0 {
            self.focus_index = 0;
        } else if self.focus_index >= count {
            self.focus_index = count - 1;
        }
    }

    /// Move focus forward, wrapping at the end
    pub fn focus_next(&mut self, count: usize) {
        if count > 0 {
            self.focus_index = (self.focus_index + 1) % count;
        }
    }

    /// Move focus backward, wrapping at the start
    pub fn focus_prev(&mut self, count: usize) {
        if count > 0 {
            self.focus_index = if self.focus_index == 0 {
                count - 1
            } else {
                self.focus_index - 1
            };
        }
    }

    /// Whether a text input is being edited
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, ViewMode::Input { .. })
    }
}
