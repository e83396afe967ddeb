//! Element (node) definition

use std::collections::BTreeMap;

/// Class names the interaction layer keys on
pub mod class {
    pub const THEME_SELECTOR: &str = "theme-selector";
    pub const LINK_TOGGLE: &str = "link-toggle";
    pub const VERSIONED_GROUP: &str = "versioned-group";
    pub const VERSION_INPUT: &str = "version-input";
    pub const OPEN_VERSION_BTN: &str = "open-version-btn";
    pub const SIDEBAR: &str = "sidebar";
    pub const TILES: &str = "tiles";
}

/// Attribute names
pub mod attr {
    pub const VALUE: &str = "value";
    pub const CHECKED: &str = "checked";
    pub const LABEL: &str = "label";
    pub const LABEL_TEXT: &str = "label-text";
    pub const KIND: &str = "kind";
    pub const TARGET: &str = "target";
    pub const ROLE: &str = "role";
    pub const ARIA_LABELLEDBY: &str = "aria-labelledby";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const TOOLTIP_TEXT: &str = "tooltip-text";
    pub const DATA_HREF: &str = "data-href";
    pub const DATA_VERSIONED_HREF: &str = "data-versioned-href";
    pub const DATA_TAB_ID: &str = "data-tab-id";
}

/// Element kinds offered by the component layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    TabBar,
    Tab,
    Panels,
    Panel,
    Section,
    Icon,
    Heading,
    Dropdown,
    DropdownItem,
    Toggle,
    Tile,
    ButtonRow,
    Button,
    VersionedGroup,
    TextInput,
}

impl Tag {
    /// Markup-style name used in outlines
    pub fn name(&self) -> &'static str {
        match self {
            Tag::TabBar => "tabs",
            Tag::Tab => "tab",
            Tag::Panels => "panels",
            Tag::Panel => "div",
            Tag::Section => "section",
            Tag::Icon => "icon",
            Tag::Heading => "heading",
            Tag::Dropdown => "dropdown",
            Tag::DropdownItem => "dropdown-item",
            Tag::Toggle => "toggle",
            Tag::Tile => "tile",
            Tag::ButtonRow => "button-row",
            Tag::Button => "button",
            Tag::VersionedGroup => "div",
            Tag::TextInput => "text-input",
        }
    }

    /// Whether the element takes keyboard focus
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            Tag::Dropdown | Tag::Toggle | Tag::Button | Tag::TextInput
        )
    }
}

/// A single element in the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Attributes, ordered by name for stable output
    pub attrs: BTreeMap<String, String>,
    pub text: Option<String>,
    pub hidden: bool,
    /// Child elements in document order
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            text: None,
            hidden: false,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Get children (immutable)
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Get children (mutable)
    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.remove(name);
    }

    /// `value` attribute, empty when unset
    pub fn value(&self) -> &str {
        self.attr(attr::VALUE).unwrap_or_default()
    }

    /// Boolean `checked` attribute (presence means checked)
    pub fn is_checked(&self) -> bool {
        self.attrs.contains_key(attr::CHECKED)
    }

    pub fn set_checked(&mut self, checked: bool) {
        if checked {
            self.set_attr(attr::CHECKED, "");
        } else {
            self.remove_attr(attr::CHECKED);
        }
    }

    /// Text of this element and all descendants, concatenated
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }
}
