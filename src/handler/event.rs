//! Events delivered to the controller and what it decides

use crate::core::LinksTarget;
use crate::dom::NodePath;

/// An interaction raised by the component layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A tab header was activated; the bar has already switched panels
    TabSelected { id: String },
    /// A dropdown picked `value`
    ThemeChanged { source: NodePath, value: String },
    /// A toggle flipped; its new state is in its `checked` attribute
    ToggleChanged { source: NodePath },
    /// Something inside the panel container was clicked
    PanelClicked { target: NodePath },
}

/// Result of dispatching one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Event did not apply to any control the controller handles
    Ignored,
    /// State changed (and was persisted where applicable)
    Applied,
    /// A link should be opened in the given context
    Open { url: String, target: LinksTarget },
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored)
    }
}
