//! Bookmark persistence
//!
//! Reads and writes the tab collection and the theme preference. Reads never
//! fail outward: missing storage initializes from the default data set and
//! unparseable storage is overwritten with it.

use tracing::{debug, warn};

use super::KeyValueStore;
use crate::core::{Tab, ThemeId};
use crate::error::Result;

/// Key holding the serialized tab collection
pub const BOOKMARKS_KEY: &str = "bookmarks.json";

/// Key holding the theme id
pub const THEME_KEY: &str = "theme";

/// Persistence store over a key-value backend
#[derive(Debug)]
pub struct BookmarkStore<S: KeyValueStore> {
    backend: S,
    defaults: Vec<Tab>,
}

impl<S: KeyValueStore> BookmarkStore<S> {
    /// Create a store; `defaults` is the read-only initial/fallback collection
    pub fn new(backend: S, defaults: Vec<Tab>) -> Self {
        Self { backend, defaults }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// The default data set
    pub fn defaults(&self) -> &[Tab] {
        &self.defaults
    }

    /// Current tab collection
    pub fn load_bookmarks(&mut self) -> Vec<Tab> {
        match self.backend.get(BOOKMARKS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Tab>>(&raw) {
                Ok(tabs) => tabs,
                Err(e) => {
                    warn!(key = BOOKMARKS_KEY, error = %e, "stored bookmarks corrupt, restoring defaults");
                    self.restore_defaults()
                }
            },
            Ok(None) => {
                debug!(key = BOOKMARKS_KEY, "no stored bookmarks, initializing defaults");
                self.restore_defaults()
            }
            Err(e) => {
                // Unreadable is not the same as corrupt: keep whatever is on disk
                warn!(key = BOOKMARKS_KEY, error = %e, "bookmarks unreadable, using defaults");
                self.defaults.clone()
            }
        }
    }

    /// Replace the stored collection with `tabs`
    pub fn save_bookmarks(&mut self, tabs: &[Tab]) -> Result<()> {
        let json = serde_json::to_string(tabs)?;
        self.backend.set(BOOKMARKS_KEY, &json)?;
        debug!(key = BOOKMARKS_KEY, tabs = tabs.len(), "bookmarks saved");
        Ok(())
    }

    /// Stored theme, `white` when unset or unrecognized
    pub fn load_theme(&self) -> ThemeId {
        match self.backend.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e: String| {
                warn!(key = THEME_KEY, error = %e, "ignoring stored theme");
                ThemeId::default()
            }),
            Ok(None) => ThemeId::default(),
            Err(e) => {
                warn!(key = THEME_KEY, error = %e, "theme unreadable");
                ThemeId::default()
            }
        }
    }

    /// Replace the stored theme
    pub fn save_theme(&mut self, theme: ThemeId) -> Result<()> {
        self.backend.set(THEME_KEY, theme.as_str())?;
        debug!(key = THEME_KEY, theme = %theme, "theme saved");
        Ok(())
    }

    /// Remove both keys; the next load starts from the defaults again
    pub fn reset(&mut self) -> Result<()> {
        self.backend.remove(BOOKMARKS_KEY)?;
        self.backend.remove(THEME_KEY)?;
        Ok(())
    }

    fn restore_defaults(&mut self) -> Vec<Tab> {
        let defaults = self.defaults.clone();
        if let Err(e) = self.save_bookmarks(&defaults) {
            warn!(key = BOOKMARKS_KEY, error = %e, "failed to persist default bookmarks");
        }
        defaults
    }
}
