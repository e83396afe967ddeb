//! Handing URLs to the system browser

use tracing::info;

use crate::core::LinksTarget;
use crate::error::{LinkdeckError, Result};

/// Opens a URL in a browsing context
pub trait LinkOpener {
    fn open(&mut self, url: &str, target: LinksTarget) -> Result<()>;
}

/// Opener backed by the platform's default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str, target: LinksTarget) -> Result<()> {
        info!(url, target = target.as_str(), "opening link");
        let result = match target {
            // The dashboard keeps running, so do not wait on the browser
            LinksTarget::Blank => open::that_detached(url),
            LinksTarget::Current => open::that(url),
        };
        result.map_err(|e| LinkdeckError::open(format!("{}: {}", url, e)))
    }
}
