//! Dashboard bootstrap and event application
//!
//! Owns the document, the controller and the opener for one session. The
//! document is rendered once here; afterwards only the controller and the
//! component-level patches below touch it.

use tracing::{info, warn};

use crate::core::{AppState, LinksTarget, ViewMode};
use crate::dom::{attr, Document, NodePath, Tag};
use crate::handler::controller::Controller;
use crate::handler::event::{Outcome, UiEvent};
use crate::handler::opener::LinkOpener;
use crate::render::render_all;
use crate::store::{BookmarkStore, KeyValueStore};

/// One running dashboard session
pub struct Dashboard<S: KeyValueStore, O: LinkOpener> {
    doc: Document,
    pub state: AppState,
    controller: Controller<S>,
    opener: O,
}

impl<S: KeyValueStore, O: LinkOpener> Dashboard<S, O> {
    /// Load theme and bookmarks, paint the document once
    pub fn bootstrap(mut store: BookmarkStore<S>, opener: O) -> Self {
        let theme = store.load_theme();
        let tabs = store.load_bookmarks();

        let mut doc = Document::new();
        render_all(&mut doc, &tabs, theme);
        doc.set_theme_class(theme);
        info!(tabs = tabs.len(), theme = %theme, "dashboard ready");

        Self {
            doc,
            state: AppState::new(),
            controller: Controller::new(store),
            opener,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<S> {
        &mut self.controller
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Dispatch an event and carry out its outcome.
    ///
    /// Opening with `_self` hands the session over to the browser and
    /// ends the dashboard.
    pub fn apply(&mut self, event: UiEvent) -> Outcome {
        let outcome = match self.controller.dispatch(&mut self.doc, event) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "failed to persist change");
                self.state.set_message(format!("Save failed: {}", e));
                return Outcome::Ignored;
            }
        };

        if let Outcome::Open { url, target } = &outcome {
            match self.opener.open(url, *target) {
                Ok(()) => {
                    self.state.set_message(format!("Opened {}", url));
                    if *target == LinksTarget::Current {
                        self.state.should_quit = true;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to open link");
                    self.state.set_message(e.to_string());
                }
            }
        }
        outcome
    }

    /// Controls of the visible panel
    pub fn focusables(&self) -> Vec<NodePath> {
        self.doc.focusables()
    }

    /// Path of the focused control
    pub fn focused_path(&self) -> Option<NodePath> {
        self.focusables().get(self.state.focus_index).cloned()
    }

    /// Move focus to `path` when it is a control of the visible panel
    pub fn focus(&mut self, path: &NodePath) -> bool {
        match self.focusables().iter().position(|p| p == path) {
            Some(i) => {
                self.state.focus_index = i;
                true
            }
            None => false,
        }
    }

    /// Switch the bar to `id` and persist the selection
    pub fn select_tab(&mut self, id: &str) -> Outcome {
        if !self.doc.select_tab(id) {
            return Outcome::Ignored;
        }
        self.state.focus_index = 0;
        self.apply(UiEvent::TabSelected { id: id.to_string() })
    }

    /// Switch to the tab at `index` in bar order
    pub fn select_tab_at(&mut self, index: usize) -> Outcome {
        match self.doc.tab_ids().get(index).cloned() {
            Some(id) => self.select_tab(&id),
            None => Outcome::Ignored,
        }
    }

    /// Switch to the next (or previous) tab, wrapping around
    pub fn cycle_tab(&mut self, forward: bool) -> Outcome {
        let ids = self.doc.tab_ids();
        if ids.is_empty() {
            return Outcome::Ignored;
        }
        let current = self
            .doc
            .active_tab_id()
            .and_then(|active| ids.iter().position(|id| id == active))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % ids.len()
        } else {
            (current + ids.len() - 1) % ids.len()
        };
        self.select_tab(&ids[next])
    }

    /// Activate the control at `path` the way its component would
    pub fn activate(&mut self, path: &NodePath) -> Outcome {
        let Some(tag) = self.doc.get(path).map(|el| el.tag) else {
            return Outcome::Ignored;
        };
        match tag {
            Tag::Toggle => {
                if let Some(el) = self.doc.get_mut(path) {
                    let checked = el.is_checked();
                    el.set_checked(!checked);
                }
                self.apply(UiEvent::ToggleChanged {
                    source: path.clone(),
                })
            }
            Tag::Dropdown => {
                self.open_theme_picker(path);
                Outcome::Ignored
            }
            Tag::TextInput => {
                self.start_edit(path);
                Outcome::Ignored
            }
            _ => self.apply(UiEvent::PanelClicked {
                target: path.clone(),
            }),
        }
    }

    /// Open the picker for the dropdown at `source`
    pub fn open_theme_picker(&mut self, source: &NodePath) {
        let Some(dropdown) = self.doc.get(source) else {
            return;
        };
        let current = dropdown.value();
        let selected = dropdown
            .children()
            .iter()
            .position(|item| item.attr(attr::VALUE) == Some(current))
            .unwrap_or(0);
        self.state.mode = ViewMode::ThemePicker {
            source: source.clone(),
            selected,
        };
    }

    /// Apply the picker's highlighted item and close it
    pub fn confirm_theme_picker(&mut self) -> Outcome {
        let ViewMode::ThemePicker { source, selected } = std::mem::take(&mut self.state.mode)
        else {
            return Outcome::Ignored;
        };
        let value = self
            .doc
            .get(&source)
            .and_then(|dropdown| dropdown.children().get(selected))
            .and_then(|item| item.attr(attr::VALUE))
            .map(str::to_string);
        let Some(value) = value else {
            return Outcome::Ignored;
        };

        if let Some(dropdown) = self.doc.get_mut(&source) {
            dropdown.set_attr(attr::VALUE, value.as_str());
        }
        let outcome = self.apply(UiEvent::ThemeChanged { source, value });
        if outcome == Outcome::Applied {
            self.state.set_message(format!("Theme: {}", self.doc.theme()));
        }
        outcome
    }

    /// Start editing the text input at `target`
    pub fn start_edit(&mut self, target: &NodePath) {
        let Some(input) = self.doc.get(target) else {
            return;
        };
        let value = input.value().to_string();
        self.state.mode = ViewMode::Input {
            target: target.clone(),
            cursor: value.chars().count(),
            original: value.clone(),
            buffer: value,
        };
    }

    /// Replace the edit buffer; the input shows it immediately
    pub fn update_edit(&mut self, new_buffer: String, new_cursor: usize) {
        let ViewMode::Input {
            target,
            buffer,
            cursor,
            ..
        } = &mut self.state.mode
        else {
            return;
        };
        if let Some(input) = self.doc.get_mut(target) {
            input.set_attr(attr::VALUE, new_buffer.as_str());
        }
        *buffer = new_buffer;
        *cursor = new_cursor;
    }

    /// Keep the edited value
    pub fn commit_edit(&mut self) {
        if self.state.is_editing() {
            self.state.mode = ViewMode::Browse;
        }
    }

    /// Drop the edit and restore the value it started from
    pub fn cancel_edit(&mut self) {
        if let ViewMode::Input {
            target, original, ..
        } = std::mem::take(&mut self.state.mode)
        {
            if let Some(input) = self.doc.get_mut(&target) {
                input.set_attr(attr::VALUE, original);
            }
        }
    }
}
