//! Dashboard tabs

use crate::error::ViewError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which tab is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Image panels, one per filtered initiative with an image
    Dashboard,
    /// Initiative summary grid
    Initiatives,
    /// Per-region status grid
    #[default]
    Tracking,
}

impl ViewMode {
    /// All tabs in display order
    pub const ALL: [ViewMode; 3] = [ViewMode::Dashboard, ViewMode::Initiatives, ViewMode::Tracking];

    /// Tab identifier
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ViewMode::Dashboard => "dashboard",
            ViewMode::Initiatives => "initiatives",
            ViewMode::Tracking => "tracking",
        }
    }

    /// Tab caption
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            ViewMode::Dashboard => "Dashboard",
            ViewMode::Initiatives => "Initiatives",
            ViewMode::Tracking => "Tracking",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ViewMode {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ViewError::UnknownViewMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_tracking() {
        assert_eq!(ViewMode::default(), ViewMode::Tracking);
    }

    #[test]
    fn parses_keys() {
        assert_eq!("dashboard".parse::<ViewMode>().unwrap(), ViewMode::Dashboard);
        assert_eq!(" Initiatives ".parse::<ViewMode>().unwrap(), ViewMode::Initiatives);
        assert!(matches!(
            "summary".parse::<ViewMode>(),
            Err(ViewError::UnknownViewMode(name)) if name == "summary"
        ));
    }

    #[test]
    fn display_round_trips() {
        for mode in ViewMode::ALL {
            assert_eq!(mode.to_string().parse::<ViewMode>().unwrap(), mode);
        }
    }
}
