//! Tab collection data model
//!
//! A tab owns a panel of three tiles (GitHub, website, storybooks) and a
//! link-target policy. The collection is never edited in place: every
//! mutation goes through a pure transform that returns a new collection.

use serde::{Deserialize, Serialize};

/// Placeholder substituted by the version input in a versioned href
pub const VERSION_PLACEHOLDER: &str = "<v>";

/// Version used when a versioned button has no explicit version
pub const DEFAULT_VERSION: &str = "latest";

/// Style variant used when a button does not name one
pub const DEFAULT_BUTTON_KIND: &str = "secondary";

/// Where links inside a tab's panel open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinksTarget {
    /// Replace the current context
    #[default]
    #[serde(rename = "_self")]
    Current,
    /// Open a new context
    #[serde(rename = "_blank")]
    Blank,
}

impl LinksTarget {
    /// Target for a link toggle in the given state
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Blank
        } else {
            Self::Current
        }
    }

    /// Wire name (`_self` / `_blank`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "_self",
            Self::Blank => "_blank",
        }
    }
}

/// A single link button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// URL template containing [`VERSION_PLACEHOLDER`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versioned_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

fn default_kind() -> String {
    DEFAULT_BUTTON_KIND.to_string()
}

impl Button {
    /// Plain link button
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            kind: default_kind(),
            icon: None,
            versioned_href: None,
            version: None,
        }
    }

    /// Button whose destination is parameterized by a version string
    pub fn versioned(
        label: impl Into<String>,
        href: impl Into<String>,
        versioned_href: impl Into<String>,
    ) -> Self {
        Self {
            versioned_href: Some(versioned_href.into()),
            ..Self::link(label, href)
        }
    }

    pub fn is_versioned(&self) -> bool {
        self.versioned_href.is_some()
    }

    /// Initial value of the paired version input
    pub fn initial_version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_VERSION)
    }
}

/// A titled group of buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub buttons: Vec<Button>,
}

impl Tile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: String::new(),
            buttons: Vec::new(),
        }
    }
}

/// One navigation entry with its own panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub links_target: LinksTarget,
    pub github: Tile,
    pub website: Tile,
    pub storybooks: Tile,
}

impl Tab {
    /// Tab with empty tiles
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: String::new(),
            selected: false,
            links_target: LinksTarget::default(),
            github: Tile::new("GitHub"),
            website: Tile::new("Website"),
            storybooks: Tile::new("Storybooks"),
        }
    }

    /// The three tiles in panel order
    pub fn tiles(&self) -> [&Tile; 3] {
        [&self.github, &self.website, &self.storybooks]
    }

    /// DOM id of this tab's panel
    pub fn panel_id(&self) -> String {
        panel_id(&self.id)
    }
}

/// DOM id of the panel belonging to `tab_id`
pub fn panel_id(tab_id: &str) -> String {
    format!("{}-panel", tab_id)
}

/// Index of the tab treated as selected.
///
/// The first tab marked `selected` wins; with none marked the first tab is
/// used. Returns `None` only for an empty collection.
pub fn selected_index(tabs: &[Tab]) -> Option<usize> {
    if tabs.is_empty() {
        return None;
    }
    Some(tabs.iter().position(|t| t.selected).unwrap_or(0))
}

/// Number of tabs marked as selected
pub fn selected_count(tabs: &[Tab]) -> usize {
    tabs.iter().filter(|t| t.selected).count()
}

/// New collection with exactly `id` selected.
///
/// Returns `None` when no tab carries `id`, leaving the caller's snapshot
/// untouched.
pub fn with_selected(tabs: &[Tab], id: &str) -> Option<Vec<Tab>> {
    if !tabs.iter().any(|t| t.id == id) {
        return None;
    }
    Some(
        tabs.iter()
            .map(|t| Tab {
                selected: t.id == id,
                ..t.clone()
            })
            .collect(),
    )
}

/// New collection with `id`'s link target replaced.
///
/// Every other tab is copied unchanged. Returns `None` for an unknown id.
pub fn with_links_target(tabs: &[Tab], id: &str, target: LinksTarget) -> Option<Vec<Tab>> {
    if !tabs.iter().any(|t| t.id == id) {
        return None;
    }
    Some(
        tabs.iter()
            .map(|t| {
                if t.id == id {
                    Tab {
                        links_target: target,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}

/// Resolve a versioned href against the raw contents of its version input.
///
/// The input is trimmed, falls back to [`DEFAULT_VERSION`] when blank and is
/// percent-encoded before replacing the first placeholder.
pub fn resolve_versioned_href(template: &str, input: &str) -> String {
    let trimmed = input.trim();
    let version = if trimmed.is_empty() {
        DEFAULT_VERSION
    } else {
        trimmed
    };
    template.replacen(VERSION_PLACEHOLDER, &urlencoding::encode(version), 1)
}
