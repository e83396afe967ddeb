//! Applying key and mouse actions to a dashboard

use crossterm::event::KeyEvent;

use super::controller::resolve_button_url;
use super::key::{handle_key_event, update_input_buffer, KeyAction};
use super::mouse::MouseAction;
use super::opener::LinkOpener;
use crate::app::Dashboard;
use crate::core::ViewMode;
use crate::dom::{class, Container, Document, NodePath, Tag};
use crate::error::{LinkdeckError, Result};
use crate::store::KeyValueStore;

/// Handle one key press end to end
pub fn handle_key<S: KeyValueStore, O: LinkOpener>(dash: &mut Dashboard<S, O>, key: KeyEvent) {
    let action = handle_key_event(&dash.state, key);
    if action == KeyAction::None {
        if let ViewMode::Input { buffer, cursor, .. } = &dash.state.mode {
            if let Some((new_buffer, new_cursor)) = update_input_buffer(key, buffer, *cursor) {
                dash.update_edit(new_buffer, new_cursor);
            }
        }
        return;
    }
    handle_action(dash, action);
}

/// Apply a key action
pub fn handle_action<S: KeyValueStore, O: LinkOpener>(
    dash: &mut Dashboard<S, O>,
    action: KeyAction,
) {
    match action {
        KeyAction::None => {}
        KeyAction::Quit => dash.state.should_quit = true,
        KeyAction::NextTab => {
            dash.cycle_tab(true);
        }
        KeyAction::PrevTab => {
            dash.cycle_tab(false);
        }
        KeyAction::SelectTab(index) => {
            dash.select_tab_at(index);
        }
        KeyAction::FocusNext => {
            let count = dash.focusables().len();
            dash.state.focus_next(count);
        }
        KeyAction::FocusPrev => {
            let count = dash.focusables().len();
            dash.state.focus_prev(count);
        }
        KeyAction::Activate => {
            if let Some(path) = dash.focused_path() {
                dash.activate(&path);
            }
        }
        KeyAction::OpenThemePicker => {
            let source = dash.document().active_panel().and_then(|panel| {
                dash.document()
                    .descendants_with_class(&panel, class::THEME_SELECTOR)
                    .into_iter()
                    .next()
            });
            if let Some(source) = source {
                dash.open_theme_picker(&source);
            }
        }
        KeyAction::CopyUrl => {
            let url = dash
                .focused_path()
                .and_then(|path| link_url_for(dash.document(), &path));
            match url {
                Some(url) => match copy_to_clipboard(&url) {
                    Ok(()) => dash.state.set_message(format!("Copied {}", url)),
                    Err(e) => dash.state.set_message(e.to_string()),
                },
                None => dash.state.set_message("No link under focus"),
            }
        }
        KeyAction::ShowHelp => dash.state.mode = ViewMode::Help,
        KeyAction::PickerUp | KeyAction::PickerDown => {
            let count = match &dash.state.mode {
                ViewMode::ThemePicker { source, .. } => dash
                    .document()
                    .get(source)
                    .map(|d| d.children().len())
                    .unwrap_or(0),
                _ => 0,
            };
            if let ViewMode::ThemePicker { selected, .. } = &mut dash.state.mode {
                if count > 0 {
                    *selected = if action == KeyAction::PickerUp {
                        (*selected + count - 1) % count
                    } else {
                        (*selected + 1) % count
                    };
                }
            }
        }
        KeyAction::PickerConfirm => {
            dash.confirm_theme_picker();
        }
        KeyAction::ConfirmInput => dash.commit_edit(),
        KeyAction::Cancel => {
            if dash.state.is_editing() {
                dash.cancel_edit();
            } else {
                dash.state.mode = ViewMode::Browse;
            }
        }
    }
}

/// Apply a mouse action
pub fn handle_mouse_action<S: KeyValueStore, O: LinkOpener>(
    dash: &mut Dashboard<S, O>,
    action: MouseAction,
) {
    match action {
        MouseAction::None => {}
        MouseAction::ScrollUp => {
            let count = dash.focusables().len();
            dash.state.focus_prev(count);
        }
        MouseAction::ScrollDown => {
            let count = dash.focusables().len();
            dash.state.focus_next(count);
        }
        MouseAction::ClickOutside => close_transient(dash),
        MouseAction::Click { target } => {
            if !matches!(dash.state.mode, ViewMode::Browse) {
                close_transient(dash);
                return;
            }
            match target.container() {
                Container::TabBar => {
                    let id = dash.document().get(&target).and_then(|el| el.id.clone());
                    if let Some(id) = id {
                        dash.select_tab(&id);
                    }
                }
                Container::Panels => {
                    let control = dash
                        .document()
                        .closest(&target, |el| el.tag.is_interactive());
                    if let Some(control) = control {
                        dash.focus(&control);
                        dash.activate(&control);
                    }
                }
            }
        }
    }
}

/// Leave a popup or edit; an edit in progress is kept
fn close_transient<S: KeyValueStore, O: LinkOpener>(dash: &mut Dashboard<S, O>) {
    if dash.state.is_editing() {
        dash.commit_edit();
    } else {
        dash.state.mode = ViewMode::Browse;
    }
}

/// URL behind the control at `path`: a button's link, or for a version
/// input the group's resolved URL
pub fn link_url_for(doc: &Document, path: &NodePath) -> Option<String> {
    let el = doc.get(path)?;
    if el.tag == Tag::TextInput {
        let group = doc.closest(path, |e| e.has_class(class::VERSIONED_GROUP))?;
        let open = doc
            .descendants_with_class(&group, class::OPEN_VERSION_BTN)
            .into_iter()
            .next()?;
        return resolve_button_url(doc, &open);
    }
    let button = doc.closest(path, |e| e.tag == Tag::Button)?;
    resolve_button_url(doc, &button)
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    arboard::Clipboard::new()
        .and_then(|mut cb| cb.set_text(text.to_string()))
        .map_err(|e| LinkdeckError::clipboard(e.to_string()))
}
