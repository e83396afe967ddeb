//! Handler module - Events, controller and input handling

pub mod action;
pub mod controller;
pub mod event;
pub mod key;
pub mod mouse;
pub mod opener;

pub use controller::{resolve_button_url, Controller};
pub use event::{Outcome, UiEvent};
pub use opener::{LinkOpener, SystemOpener};
