//! Diagnostic logging
//!
//! Off unless `LINKDECK_LOG` is set. The TUI owns the terminal, so events go
//! to `linkdeck.log` inside the data directory, never to stderr.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive
pub const LOG_ENV: &str = "LINKDECK_LOG";

/// Log file name inside the data directory
pub const LOG_FILE: &str = "linkdeck.log";

/// Install the file subscriber when `LINKDECK_LOG` is set.
///
/// Returns the log file path when logging was enabled.
pub fn init_logging(data_dir: &Path) -> anyhow::Result<Option<PathBuf>> {
    let Ok(directive) = env::var(LOG_ENV) else {
        return Ok(None);
    };
    if directive.trim().is_empty() {
        return Ok(None);
    }

    fs::create_dir_all(data_dir)?;
    let path = data_dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        // Another subscriber is already global
        return Ok(None);
    }
    Ok(Some(path))
}
