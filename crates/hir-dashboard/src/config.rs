//! Dashboard configuration
//!
//! Read from TOML. Every field has a default, so an empty file is valid.
//! Command-line flags override file values after loading.

use crate::error::DashboardError;
use hir_view::ViewMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file consulted when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "housing-dashboard.toml";

/// Log line format on stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Initiative sheet exported as JSON or YAML rows
    pub data_path: PathBuf,

    /// Directory holding `<id>.png` images
    pub assets_dir: PathBuf,

    /// Tab shown when none is requested
    pub default_tab: ViewMode,

    /// Fallback `EnvFilter` directives when `RUST_LOG` is unset
    pub log_filter: String,

    /// Log line format
    pub log_format: LogFormat,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("initiatives.json"),
            assets_dir: PathBuf::from("assets"),
            default_tab: ViewMode::default(),
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_log_filter() -> String {
    "hir_dashboard=info,hir_filter=info".to_string()
}

impl DashboardConfig {
    /// Parse a TOML document
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Load from `path`, or from [`DEFAULT_CONFIG_PATH`] when `None`
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, DashboardError> {
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        if !path.exists() {
            if explicit {
                return Err(DashboardError::ConfigNotFound(path.to_path_buf()));
            }
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|source| DashboardError::io_error(path, source))?;
        Self::from_toml(&content).map_err(|source| DashboardError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(
        mut self,
        data_path: Option<PathBuf>,
        assets_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(data_path) = data_path {
            self.data_path = data_path;
        }
        if let Some(assets_dir) = assets_dir {
            self.assets_dir = assets_dir;
        }
        self
    }
}
