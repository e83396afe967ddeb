//! Global theme identifier

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefix of the document-level theme class
pub const THEME_ZONE_PREFIX: &str = "theme-zone-";

/// Visual theme applied document-wide
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    White,
    G10,
    G90,
    G100,
}

impl ThemeId {
    /// All themes in dropdown order
    pub const ALL: [ThemeId; 4] = [Self::White, Self::G10, Self::G90, Self::G100];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::G10 => "g10",
            Self::G90 => "g90",
            Self::G100 => "g100",
        }
    }

    /// Whether the theme uses a dark background
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::G90 | Self::G100)
    }

    /// Document-level class for this theme (`theme-zone-g90`)
    pub fn zone_class(&self) -> String {
        format!("{}{}", THEME_ZONE_PREFIX, self.as_str())
    }

    /// Parse a document-level theme class back into a theme
    pub fn from_zone_class(class: &str) -> Option<Self> {
        class.strip_prefix(THEME_ZONE_PREFIX)?.parse().ok()
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "white" => Ok(Self::White),
            "g10" => Ok(Self::G10),
            "g90" => Ok(Self::G90),
            "g100" => Ok(Self::G100),
            other => Err(format!(
                "unknown theme '{}' (expected white, g10, g90 or g100)",
                other
            )),
        }
    }
}
