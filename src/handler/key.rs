//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{AppState, ViewMode};

/// Actions that can result from key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Switch to the next tab
    NextTab,
    /// Switch to the previous tab
    PrevTab,
    /// Switch to the tab at this index
    SelectTab(usize),
    /// Move focus to the next control
    FocusNext,
    /// Move focus to the previous control
    FocusPrev,
    /// Activate the focused control
    Activate,
    /// Open the theme picker of the visible panel
    OpenThemePicker,
    /// Copy the focused link's URL to the system clipboard
    CopyUrl,
    /// Show help popup
    ShowHelp,
    /// Move up in the theme picker
    PickerUp,
    /// Move down in the theme picker
    PickerDown,
    /// Apply the highlighted theme
    PickerConfirm,
    /// Commit the edited text input
    ConfirmInput,
    /// Cancel current input/popup
    Cancel,
}

/// Handle key event and return the resulting action
pub fn handle_key_event(state: &AppState, key: KeyEvent) -> KeyAction {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match &state.mode {
        ViewMode::Browse => handle_browse_mode(key),
        ViewMode::Input { .. } => handle_input_mode(key),
        ViewMode::ThemePicker { .. } => handle_picker_mode(key),
        ViewMode::Help => handle_help_mode(key),
    }
}

/// Handle keys in browse mode
fn handle_browse_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,

        // Tabs
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => KeyAction::NextTab,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => KeyAction::PrevTab,
        KeyCode::Char(c @ '1'..='9') => KeyAction::SelectTab(c as usize - '1' as usize),

        // Panel controls
        KeyCode::Down | KeyCode::Char('j') => KeyAction::FocusNext,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::FocusPrev,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,

        KeyCode::Char('t') => KeyAction::OpenThemePicker,
        KeyCode::Char('y') => KeyAction::CopyUrl,
        KeyCode::Char('?') => KeyAction::ShowHelp,

        _ => KeyAction::None,
    }
}

/// Handle keys while a version input is edited
fn handle_input_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::ConfirmInput,
        KeyCode::Esc => KeyAction::Cancel,
        _ => KeyAction::None, // Buffer updates handled separately
    }
}

/// Handle keys in the theme picker
fn handle_picker_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => KeyAction::PickerUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::PickerDown,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::PickerConfirm,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('t') => KeyAction::Cancel,
        _ => KeyAction::None,
    }
}

/// Handle keys while help is shown
fn handle_help_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => KeyAction::Cancel,
        _ => KeyAction::None,
    }
}

/// Update input buffer based on key event.
///
/// `cursor` counts chars. Returns the new buffer and cursor, or None if
/// nothing changed.
pub fn update_input_buffer(key: KeyEvent, buffer: &str, cursor: usize) -> Option<(String, usize)> {
    let len = buffer.chars().count();
    let cursor = cursor.min(len);
    let byte_at = |i: usize| {
        buffer
            .char_indices()
            .nth(i)
            .map(|(b, _)| b)
            .unwrap_or(buffer.len())
    };

    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut new_buffer = buffer.to_string();
            new_buffer.insert(byte_at(cursor), c);
            Some((new_buffer, cursor + 1))
        }
        KeyCode::Backspace if cursor > 0 => {
            let mut new_buffer = buffer.to_string();
            new_buffer.remove(byte_at(cursor - 1));
            Some((new_buffer, cursor - 1))
        }
        KeyCode::Delete if cursor < len => {
            let mut new_buffer = buffer.to_string();
            new_buffer.remove(byte_at(cursor));
            Some((new_buffer, cursor))
        }
        KeyCode::Left if cursor > 0 => Some((buffer.to_string(), cursor - 1)),
        KeyCode::Right if cursor < len => Some((buffer.to_string(), cursor + 1)),
        KeyCode::Home if cursor > 0 => Some((buffer.to_string(), 0)),
        KeyCode::End if cursor < len => Some((buffer.to_string(), len)),
        _ => None,
    }
}
