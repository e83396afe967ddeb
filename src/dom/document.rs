//! Document - the retained element tree and its traversal helpers
//!
//! The document holds two containers (tab bar and panels) and a
//! document-level theme class. Controls keep their own state in attributes
//! (`value`, `checked`), so patches survive without a rebuild.

use std::fmt::Write as _;

use super::node::{attr, Element, Tag};
use crate::core::tab::panel_id;
use crate::core::ThemeId;

/// Id of the tab bar container
pub const TAB_BAR_ID: &str = "main-tabs";

/// Id of the panel container
pub const PANELS_ID: &str = "tab-panels";

/// Top-level container a node lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    TabBar,
    Panels,
}

/// Address of a node: its container plus child indices from the container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath {
    container: Container,
    indices: Vec<usize>,
}

impl NodePath {
    /// Path of a container itself
    pub fn root(container: Container) -> Self {
        Self {
            container,
            indices: Vec::new(),
        }
    }

    /// Path of the `index`-th child of this node
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self {
            container: self.container,
            indices,
        }
    }

    /// Path of the parent, `None` for a container
    pub fn parent(&self) -> Option<Self> {
        if self.indices.is_empty() {
            return None;
        }
        let mut indices = self.indices.clone();
        indices.pop();
        Some(Self {
            container: self.container,
            indices,
        })
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Depth below the container (container = 0)
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Whether this path is `ancestor` or lies below it
    pub fn is_within(&self, ancestor: &NodePath) -> bool {
        self.container == ancestor.container && self.indices.starts_with(&ancestor.indices)
    }
}

/// The retained element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    tab_bar: Element,
    panels: Element,
    theme_class: String,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with empty containers
    pub fn new() -> Self {
        Self {
            tab_bar: Element::new(Tag::TabBar).with_id(TAB_BAR_ID),
            panels: Element::new(Tag::Panels).with_id(PANELS_ID),
            theme_class: ThemeId::default().zone_class(),
        }
    }

    pub fn container(&self, container: Container) -> &Element {
        match container {
            Container::TabBar => &self.tab_bar,
            Container::Panels => &self.panels,
        }
    }

    pub fn container_mut(&mut self, container: Container) -> &mut Element {
        match container {
            Container::TabBar => &mut self.tab_bar,
            Container::Panels => &mut self.panels,
        }
    }

    /// Element at `path`
    pub fn get(&self, path: &NodePath) -> Option<&Element> {
        let mut current = self.container(path.container);
        for &i in &path.indices {
            current = current.children().get(i)?;
        }
        Some(current)
    }

    /// Element at `path` (mutable)
    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut Element> {
        let mut current = self.container_mut(path.container);
        for &i in &path.indices {
            current = current.children_mut().get_mut(i)?;
        }
        Some(current)
    }

    /// `path` itself or its nearest ancestor matching `pred`
    pub fn closest(&self, path: &NodePath, pred: impl Fn(&Element) -> bool) -> Option<NodePath> {
        let mut current = Some(path.clone());
        while let Some(p) = current {
            if self.get(&p).is_some_and(&pred) {
                return Some(p);
            }
            current = p.parent();
        }
        None
    }

    /// All nodes matching `pred`, tab bar first, in document order
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<NodePath> {
        let mut out = Vec::new();
        for container in [Container::TabBar, Container::Panels] {
            let root = NodePath::root(container);
            collect_matching(self.container(container), &root, &pred, &mut out);
        }
        out
    }

    /// Descendants of `path` (excluding itself) matching `pred`
    pub fn find_within(
        &self,
        path: &NodePath,
        pred: impl Fn(&Element) -> bool,
    ) -> Vec<NodePath> {
        let mut out = Vec::new();
        if let Some(el) = self.get(path) {
            for (i, child) in el.children().iter().enumerate() {
                collect_matching(child, &path.child(i), &pred, &mut out);
            }
        }
        out
    }

    /// All nodes carrying `class`
    pub fn query_class(&self, class: &str) -> Vec<NodePath> {
        self.find_all(|el| el.has_class(class))
    }

    /// Descendants of `path` carrying `class`
    pub fn descendants_with_class(&self, path: &NodePath, class: &str) -> Vec<NodePath> {
        self.find_within(path, |el| el.has_class(class))
    }

    /// Node whose id is `id`
    pub fn find_by_id(&self, id: &str) -> Option<NodePath> {
        self.find_all(|el| el.id.as_deref() == Some(id))
            .into_iter()
            .next()
    }

    /// Remove every child of both containers
    pub fn clear(&mut self) {
        self.tab_bar.children_mut().clear();
        self.tab_bar.remove_attr(attr::VALUE);
        self.panels.children_mut().clear();
    }

    /// Ids of the tab headers in bar order
    pub fn tab_ids(&self) -> Vec<String> {
        self.tab_bar
            .children()
            .iter()
            .filter_map(|t| t.id.clone())
            .collect()
    }

    /// Id of the tab the bar currently shows
    pub fn active_tab_id(&self) -> Option<&str> {
        self.tab_bar.attr(attr::VALUE)
    }

    /// Switch the bar to `id`: set its value, reveal the matching panel and
    /// hide every other one. Returns false for an unknown id.
    pub fn select_tab(&mut self, id: &str) -> bool {
        if !self
            .tab_bar
            .children()
            .iter()
            .any(|t| t.id.as_deref() == Some(id))
        {
            return false;
        }
        self.tab_bar.set_attr(attr::VALUE, id);
        let target = panel_id(id);
        for panel in self.panels.children_mut() {
            panel.hidden = panel.id.as_deref() != Some(target.as_str());
        }
        true
    }

    /// Path of the visible panel
    pub fn active_panel(&self) -> Option<NodePath> {
        let root = NodePath::root(Container::Panels);
        self.panels
            .children()
            .iter()
            .position(|p| !p.hidden)
            .map(|i| root.child(i))
    }

    /// Interactive controls of the visible panel in document order
    pub fn focusables(&self) -> Vec<NodePath> {
        match self.active_panel() {
            Some(panel) => self.find_within(&panel, |el| el.tag.is_interactive() && !el.hidden),
            None => Vec::new(),
        }
    }

    pub fn theme_class(&self) -> &str {
        &self.theme_class
    }

    /// Apply the document-level theme class
    pub fn set_theme_class(&mut self, theme: ThemeId) {
        self.theme_class = theme.zone_class();
    }

    /// Theme encoded in the document-level class
    pub fn theme(&self) -> ThemeId {
        ThemeId::from_zone_class(&self.theme_class).unwrap_or_default()
    }

    /// Stable indented text form of the whole document
    pub fn outline(&self) -> String {
        let mut out = format!("html class=\"{}\"\n", self.theme_class);
        write_outline(&self.tab_bar, 1, &mut out);
        write_outline(&self.panels, 1, &mut out);
        out
    }
}

fn collect_matching(
    el: &Element,
    path: &NodePath,
    pred: &impl Fn(&Element) -> bool,
    out: &mut Vec<NodePath>,
) {
    if pred(el) {
        out.push(path.clone());
    }
    for (i, child) in el.children().iter().enumerate() {
        collect_matching(child, &path.child(i), pred, out);
    }
}

fn write_outline(el: &Element, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(el.tag.name());
    if let Some(id) = &el.id {
        let _ = write!(out, "#{}", id);
    }
    for class in &el.classes {
        let _ = write!(out, ".{}", class);
    }
    for (name, value) in &el.attrs {
        if value.is_empty() {
            let _ = write!(out, " {}", name);
        } else {
            let _ = write!(out, " {}=\"{}\"", name, value);
        }
    }
    if el.hidden {
        out.push_str(" [hidden]");
    }
    if let Some(text) = el.text.as_deref().filter(|t| !t.is_empty()) {
        let _ = write!(out, " \"{}\"", text);
    }
    out.push('\n');
    for child in el.children() {
        write_outline(child, depth + 1, out);
    }
}
