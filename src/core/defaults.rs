//! Built-in default data set
//!
//! The initial and fallback tab collection. It is only ever read; the
//! persistence layer copies it into storage on first run and after
//! corruption.

use std::fs;
use std::path::Path;

use super::Tab;
use crate::error::Result;

const BUILTIN_BOOKMARKS: &str = include_str!("../../assets/default_bookmarks.json");

/// Parse the bundled default data set
pub fn builtin_bookmarks() -> Result<Vec<Tab>> {
    Ok(serde_json::from_str(BUILTIN_BOOKMARKS)?)
}

/// Load a replacement default data set from a JSON file
pub fn load_bookmarks_file(path: &Path) -> Result<Vec<Tab>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Resolve the default data set: an explicit file when given, else the
/// bundled set
pub fn resolve_defaults(path: Option<&Path>) -> Result<Vec<Tab>> {
    match path {
        Some(p) => load_bookmarks_file(p),
        None => builtin_bookmarks(),
    }
}
