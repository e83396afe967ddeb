//! Element tree generation
//!
//! Turns the tab collection and the current theme into elements. Output is
//! a pure function of the input; [`render_all`] is the only place the
//! document containers are rebuilt.

use crate::core::tab::{panel_id, selected_index};
use crate::core::{Button, LinksTarget, Tab, ThemeId, Tile};
use crate::dom::document::TAB_BAR_ID;
use crate::dom::{attr, class, Container, Document, Element, Tag};

/// Label of the theme dropdown
pub const THEME_LABEL: &str = "Theme";

/// Label of the link-target toggle
pub const LINK_TOGGLE_LABEL: &str = "Open links in new tab";

/// Placeholder of a version input
pub const VERSION_PLACEHOLDER_TEXT: &str = "Enter version";

/// Glyph on the versioned open trigger
pub const OPEN_ICON: &str = "↗";

/// Tab bar with one header per tab, in collection order
pub fn render_tab_bar(tabs: &[Tab]) -> Element {
    let headers = tabs.iter().map(|tab| {
        Element::new(Tag::Tab)
            .with_id(tab.id.as_str())
            .with_attr(attr::TARGET, tab.panel_id())
            .with_attr(attr::VALUE, tab.id.as_str())
            .with_text(tab.name.as_str())
    });

    let mut bar = Element::new(Tag::TabBar)
        .with_id(TAB_BAR_ID)
        .with_children(headers);
    if let Some(i) = selected_index(tabs) {
        bar.set_attr(attr::VALUE, tabs[i].id.as_str());
    }
    bar
}

/// Hidden panel for `tab`: sidebar controls, then the three tiles
pub fn render_panel(tab: &Tab, theme: ThemeId) -> Element {
    let mut sidebar = Element::new(Tag::Section).with_class(class::SIDEBAR);
    if !tab.icon.is_empty() {
        sidebar = sidebar.with_child(Element::new(Tag::Icon).with_text(tab.icon.as_str()));
    }

    let items = ThemeId::ALL.iter().map(|t| {
        Element::new(Tag::DropdownItem)
            .with_attr(attr::VALUE, t.as_str())
            .with_text(t.as_str())
    });
    let dropdown = Element::new(Tag::Dropdown)
        .with_class(class::THEME_SELECTOR)
        .with_attr(attr::LABEL, THEME_LABEL)
        .with_attr(attr::VALUE, theme.as_str())
        .with_children(items);

    let mut toggle = Element::new(Tag::Toggle)
        .with_class(class::LINK_TOGGLE)
        .with_attr(attr::LABEL_TEXT, LINK_TOGGLE_LABEL)
        .with_attr(attr::DATA_TAB_ID, tab.id.as_str());
    toggle.set_checked(tab.links_target == LinksTarget::Blank);

    sidebar = sidebar
        .with_child(Element::new(Tag::Heading).with_text(tab.name.as_str()))
        .with_child(dropdown)
        .with_child(toggle);

    let tiles = Element::new(Tag::Section)
        .with_class(class::TILES)
        .with_children(tab.tiles().into_iter().map(render_tile));

    Element::new(Tag::Panel)
        .with_id(panel_id(&tab.id))
        .with_attr(attr::ROLE, "tabpanel")
        .with_attr(attr::ARIA_LABELLEDBY, tab.id.as_str())
        .with_hidden(true)
        .with_child(sidebar)
        .with_child(tiles)
}

/// Tile heading, a button row when there are buttons, and the tile icon
pub fn render_tile(tile: &Tile) -> Element {
    let heading = Element::new(Tag::Heading).with_text(tile.title.as_str());
    let mut el = Element::new(Tag::Tile).with_child(heading);
    if !tile.buttons.is_empty() {
        el = el.with_child(
            Element::new(Tag::ButtonRow).with_children(tile.buttons.iter().map(render_button)),
        );
    }
    if !tile.icon.is_empty() {
        el = el.with_child(Element::new(Tag::Icon).with_text(tile.icon.as_str()));
    }
    el
}

/// A single button, or a versioned group wrapping one
pub fn render_button(button: &Button) -> Element {
    let mut plain = Element::new(Tag::Button)
        .with_attr(attr::KIND, button.kind.as_str())
        .with_attr(attr::DATA_HREF, button.href.as_deref().unwrap_or_default())
        .with_text(button.label.as_str());
    if let Some(icon) = button.icon.as_deref().filter(|i| !i.is_empty()) {
        plain = plain.with_child(Element::new(Tag::Icon).with_text(icon));
    }

    let Some(template) = button.versioned_href.as_deref() else {
        return plain;
    };

    let input = Element::new(Tag::TextInput)
        .with_class(class::VERSION_INPUT)
        .with_attr(attr::PLACEHOLDER, VERSION_PLACEHOLDER_TEXT)
        .with_attr(attr::VALUE, button.initial_version());
    let open = Element::new(Tag::Button)
        .with_class(class::OPEN_VERSION_BTN)
        .with_attr(attr::KIND, "secondary")
        .with_attr(attr::TOOLTIP_TEXT, "Open")
        .with_child(Element::new(Tag::Icon).with_text(OPEN_ICON));

    Element::new(Tag::VersionedGroup)
        .with_class(class::VERSIONED_GROUP)
        .with_attr(attr::DATA_VERSIONED_HREF, template)
        .with_child(plain)
        .with_child(input)
        .with_child(open)
}

/// Clear and repopulate both containers, then reveal the selected panel
pub fn render_all(doc: &mut Document, tabs: &[Tab], theme: ThemeId) {
    doc.clear();
    *doc.container_mut(Container::TabBar) = render_tab_bar(tabs);
    doc.container_mut(Container::Panels)
        .children_mut()
        .extend(tabs.iter().map(|tab| render_panel(tab, theme)));

    if let Some(i) = selected_index(tabs) {
        doc.select_tab(&tabs[i].id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodePath;

    fn create_test_tabs() -> Vec<Tab> {
        let mut one = Tab::new("t1", "One");
        one.icon = "◆".to_string();
        one.github.buttons.push(Button::link("Repo", "https://github.com/x/one"));
        one.storybooks.buttons.push(Button::versioned(
            "Storybook",
            "https://sb.example.com",
            "https://example.com/docs/<v>/index.html",
        ));

        let mut two = Tab::new("t2", "Two");
        two.selected = true;
        two.links_target = LinksTarget::Blank;
        vec![one, two]
    }

    #[test]
    fn test_tab_bar_headers_in_order() {
        let bar = render_tab_bar(&create_test_tabs());
        let ids: Vec<_> = bar.children().iter().filter_map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
        assert_eq!(bar.attr(attr::VALUE), Some("t2"));
        assert_eq!(bar.children()[0].attr(attr::TARGET), Some("t1-panel"));
        assert_eq!(bar.children()[0].text.as_deref(), Some("One"));
    }

    #[test]
    fn test_tab_bar_defaults_to_first() {
        let mut tabs = create_test_tabs();
        tabs[1].selected = false;
        assert_eq!(render_tab_bar(&tabs).attr(attr::VALUE), Some("t1"));
        assert_eq!(render_tab_bar(&[]).attr(attr::VALUE), None);
    }

    #[test]
    fn test_panel_controls() {
        let tabs = create_test_tabs();
        let panel = render_panel(&tabs[0], ThemeId::G90);

        assert!(panel.hidden);
        assert_eq!(panel.id.as_deref(), Some("t1-panel"));
        assert_eq!(panel.attr(attr::ARIA_LABELLEDBY), Some("t1"));

        let sidebar = &panel.children()[0];
        assert!(sidebar.has_class(class::SIDEBAR));
        let dropdown = sidebar
            .children()
            .iter()
            .find(|c| c.has_class(class::THEME_SELECTOR))
            .unwrap();
        assert_eq!(dropdown.value(), "g90");
        assert_eq!(dropdown.children().len(), 4);

        let toggle = sidebar
            .children()
            .iter()
            .find(|c| c.has_class(class::LINK_TOGGLE))
            .unwrap();
        assert_eq!(toggle.attr(attr::DATA_TAB_ID), Some("t1"));
        assert!(!toggle.is_checked());

        let blank = render_panel(&tabs[1], ThemeId::White);
        let toggle = blank.children()[0]
            .children()
            .iter()
            .find(|c| c.has_class(class::LINK_TOGGLE))
            .unwrap();
        assert!(toggle.is_checked());
    }

    #[test]
    fn test_tile_without_buttons_has_no_row() {
        let tile = Tile::new("Empty");
        let el = render_tile(&tile);
        assert_eq!(el.children().len(), 1);
        assert_eq!(el.children()[0].text.as_deref(), Some("Empty"));
    }

    #[test]
    fn test_button_preserves_order_and_href() {
        let mut tile = Tile::new("Links");
        tile.buttons.push(Button::link("A", "https://a.dev"));
        tile.buttons.push(Button {
            href: None,
            ..Button::link("B", "")
        });
        let el = render_tile(&tile);
        let row = &el.children()[1];
        assert_eq!(row.tag, Tag::ButtonRow);
        assert_eq!(row.children()[0].attr(attr::DATA_HREF), Some("https://a.dev"));
        assert_eq!(row.children()[1].attr(attr::DATA_HREF), Some(""));
        assert_eq!(row.children()[1].attr(attr::KIND), Some("secondary"));
    }

    #[test]
    fn test_versioned_button_group() {
        let mut button = Button::versioned("Docs", "https://d.dev", "https://d.dev/<v>/");
        button.version = Some("1.2".to_string());
        let group = render_button(&button);

        assert!(group.has_class(class::VERSIONED_GROUP));
        assert_eq!(group.attr(attr::DATA_VERSIONED_HREF), Some("https://d.dev/<v>/"));
        let kinds: Vec<_> = group.children().iter().map(|c| c.tag).collect();
        assert_eq!(kinds, vec![Tag::Button, Tag::TextInput, Tag::Button]);
        assert_eq!(group.children()[1].value(), "1.2");
        assert!(group.children()[2].has_class(class::OPEN_VERSION_BTN));
    }

    #[test]
    fn test_render_all_reveals_selected_panel() {
        let mut doc = Document::new();
        render_all(&mut doc, &create_test_tabs(), ThemeId::G10);

        assert_eq!(doc.tab_ids(), vec!["t1", "t2"]);
        assert_eq!(doc.active_tab_id(), Some("t2"));
        let active = doc.active_panel().unwrap();
        assert_eq!(active, NodePath::root(Container::Panels).child(1));
        assert_eq!(doc.query_class(class::THEME_SELECTOR).len(), 2);
    }

    #[test]
    fn test_render_all_is_idempotent() {
        let tabs = create_test_tabs();
        let mut doc = Document::new();
        render_all(&mut doc, &tabs, ThemeId::G100);
        let first = doc.clone();
        render_all(&mut doc, &tabs, ThemeId::G100);
        assert_eq!(doc, first);
        assert_eq!(doc.outline(), first.outline());
    }

    #[test]
    fn test_render_all_empty_collection() {
        let mut doc = Document::new();
        render_all(&mut doc, &create_test_tabs(), ThemeId::White);
        render_all(&mut doc, &[], ThemeId::White);
        assert!(doc.tab_ids().is_empty());
        assert!(doc.active_panel().is_none());
        assert!(doc.focusables().is_empty());
    }
}
