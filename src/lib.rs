//! linkdeck - A tabbed bookmark dashboard for the terminal
//!
//! Tabs of grouped link buttons are rendered once into a retained document,
//! then kept in sync with persisted bookmarks and theme through small
//! attribute patches.

pub mod app;
pub mod core;
pub mod dom;
pub mod error;
pub mod handler;
pub mod render;
pub mod store;
