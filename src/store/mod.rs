//! Store module - Persistence of bookmarks and theme

pub mod backend;
pub mod bookmarks;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use bookmarks::{BookmarkStore, BOOKMARKS_KEY, THEME_KEY};
