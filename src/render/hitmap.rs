//! Screen regions painted for document nodes

use ratatui::layout::{Position, Rect};

use crate::dom::NodePath;

/// Rects recorded while painting, mapped to the node drawn there
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, NodePath)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` as drawn in `area`
    pub fn push(&mut self, area: Rect, path: NodePath) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, path));
        }
    }

    /// Node drawn at a cell; later regions sit on top of earlier ones
    pub fn hit(&self, column: u16, row: u16) -> Option<&NodePath> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, path)| path)
    }

    /// Area recorded for `path`
    pub fn area_of(&self, path: &NodePath) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, p)| p == path)
            .map(|(area, _)| *area)
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
