//! Application module
//!
//! This module contains the dashboard session, configuration, logging
//! and the event loop for linkdeck.

mod config;
mod config_file;
mod dashboard;
mod event_loop;
mod logging;
mod render;

pub use config::{exit_code, Config};
pub use config_file::{ConfigFile, GeneralConfig, StorageConfig};
pub use dashboard::Dashboard;
pub use event_loop::{format_clock, run_app, CLOCK_FORMAT};
pub use logging::{init_logging, LOG_ENV, LOG_FILE};
pub use render::{render_frame, RenderContext};
