//! Mouse event handling

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::dom::NodePath;
use crate::render::HitMap;

/// Actions triggered by mouse events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MouseAction {
    None,
    /// Left click on a painted node
    Click { target: NodePath },
    /// Left click outside any node
    ClickOutside,
    ScrollUp,
    ScrollDown,
}

/// Route a mouse event through the hit map of the last frame
pub fn handle_mouse_event(event: MouseEvent, hits: &HitMap) -> MouseAction {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => match hits.hit(event.column, event.row) {
            Some(path) => MouseAction::Click {
                target: path.clone(),
            },
            None => MouseAction::ClickOutside,
        },
        MouseEventKind::ScrollUp => MouseAction::ScrollUp,
        MouseEventKind::ScrollDown => MouseAction::ScrollDown,
        _ => MouseAction::None,
    }
}
