//! Interaction controller
//!
//! Single entry point translating [`UiEvent`]s into state changes. Every
//! mutation follows load snapshot, pure transform, save snapshot. DOM side
//! effects are targeted attribute patches; nothing is re-rendered.

use tracing::{debug, trace, warn};

use super::event::{Outcome, UiEvent};
use crate::core::{resolve_versioned_href, with_links_target, with_selected, LinksTarget, ThemeId};
use crate::dom::{attr, class, Container, Document, NodePath, Tag};
use crate::error::Result;
use crate::store::{BookmarkStore, KeyValueStore};

/// Dispatches events against a bookmark store
#[derive(Debug)]
pub struct Controller<S: KeyValueStore> {
    store: BookmarkStore<S>,
}

impl<S: KeyValueStore> Controller<S> {
    pub fn new(store: BookmarkStore<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &BookmarkStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BookmarkStore<S> {
        &mut self.store
    }

    /// Handle one event. Errors are write failures; the DOM patch (if any)
    /// has already been applied when one is returned.
    pub fn dispatch(&mut self, doc: &mut Document, event: UiEvent) -> Result<Outcome> {
        match event {
            UiEvent::TabSelected { id } => self.on_tab_selected(&id),
            UiEvent::ThemeChanged { source, value } => self.on_theme_changed(doc, &source, &value),
            UiEvent::ToggleChanged { source } => self.on_toggle_changed(doc, &source),
            UiEvent::PanelClicked { target } => Ok(self.on_panel_clicked(doc, &target)),
        }
    }

    fn on_tab_selected(&mut self, id: &str) -> Result<Outcome> {
        let tabs = self.store.load_bookmarks();
        let Some(updated) = with_selected(&tabs, id) else {
            trace!(id, "selection of unknown tab ignored");
            return Ok(Outcome::Ignored);
        };
        self.store.save_bookmarks(&updated)?;
        debug!(id, "tab selection persisted");
        Ok(Outcome::Applied)
    }

    fn on_theme_changed(
        &mut self,
        doc: &mut Document,
        source: &NodePath,
        value: &str,
    ) -> Result<Outcome> {
        if !doc
            .get(source)
            .is_some_and(|el| el.has_class(class::THEME_SELECTOR))
        {
            trace!(?source, "dropdown change outside a theme selector ignored");
            return Ok(Outcome::Ignored);
        }
        let theme: ThemeId = match value.parse() {
            Ok(theme) => theme,
            Err(e) => {
                warn!(value, error = %e, "theme change ignored");
                return Ok(Outcome::Ignored);
            }
        };

        doc.set_theme_class(theme);
        for path in doc.query_class(class::THEME_SELECTOR) {
            if let Some(el) = doc.get_mut(&path) {
                el.set_attr(attr::VALUE, theme.as_str());
            }
        }
        self.store.save_theme(theme)?;
        Ok(Outcome::Applied)
    }

    fn on_toggle_changed(&mut self, doc: &Document, source: &NodePath) -> Result<Outcome> {
        let Some(toggle) = doc
            .get(source)
            .filter(|el| el.has_class(class::LINK_TOGGLE))
        else {
            trace!(?source, "toggle change outside a link toggle ignored");
            return Ok(Outcome::Ignored);
        };
        let Some(tab_id) = toggle.attr(attr::DATA_TAB_ID) else {
            return Ok(Outcome::Ignored);
        };
        let target = LinksTarget::from_checked(toggle.is_checked());

        let tabs = self.store.load_bookmarks();
        let Some(updated) = with_links_target(&tabs, tab_id, target) else {
            trace!(tab_id, "toggle for unknown tab ignored");
            return Ok(Outcome::Ignored);
        };
        self.store.save_bookmarks(&updated)?;
        debug!(tab_id, target = target.as_str(), "links target persisted");
        Ok(Outcome::Applied)
    }

    fn on_panel_clicked(&mut self, doc: &Document, target: &NodePath) -> Outcome {
        if target.container() != Container::Panels {
            return Outcome::Ignored;
        }
        let Some(button) = doc.closest(target, |el| el.tag == Tag::Button) else {
            return Outcome::Ignored;
        };
        let Some(active_id) = doc.active_tab_id() else {
            trace!("panel click without an active tab");
            return Outcome::Ignored;
        };
        let tabs = self.store.load_bookmarks();
        let Some(active) = tabs.iter().find(|t| t.id == active_id) else {
            trace!(active_id, "active tab missing from collection");
            return Outcome::Ignored;
        };

        match resolve_button_url(doc, &button) {
            Some(url) => Outcome::Open {
                url,
                target: active.links_target,
            },
            None => Outcome::Ignored,
        }
    }
}

/// URL a click on the button at `button` opens, if any.
///
/// An open trigger inside a versioned group resolves the group's template
/// against its version input; any other button uses its `data-href`.
pub fn resolve_button_url(doc: &Document, button: &NodePath) -> Option<String> {
    let el = doc.get(button)?;
    if el.has_class(class::OPEN_VERSION_BTN) {
        if let Some(group) = doc.closest(button, |e| e.has_class(class::VERSIONED_GROUP)) {
            let template = doc.get(&group)?.attr(attr::DATA_VERSIONED_HREF)?;
            let input = doc
                .descendants_with_class(&group, class::VERSION_INPUT)
                .first()
                .and_then(|p| doc.get(p))
                .map(|input| input.value().to_string())
                .unwrap_or_default();
            return Some(resolve_versioned_href(template, &input));
        }
    }
    el.attr(attr::DATA_HREF)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}
