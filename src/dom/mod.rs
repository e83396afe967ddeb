//! Dom module - Retained element tree and traversal

pub mod document;
pub mod node;

pub use document::{Container, Document, NodePath};
pub use node::{attr, class, Element, Tag};
