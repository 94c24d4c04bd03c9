//! Error types for the dashboard front end
//!
//! Covers the files the command line reads besides the dataset (the TOML
//! config and replay scripts) and output rendering. Dataset errors stay
//! [`hir_records::LoadError`].

use std::path::PathBuf;

/// Errors raised by the command-line front end
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Explicitly requested config file does not exist
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed config
    #[error("invalid config {path}: {source}")]
    Toml {
        /// Config file
        path: PathBuf,
        /// Parser error
        #[source]
        source: toml::de::Error,
    },

    /// Script extension is not json, yaml or yml
    #[error("unsupported script extension: '{0}'")]
    UnsupportedScript(String),

    /// Malformed JSON script, or JSON output failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML script
    #[error("invalid YAML script: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// View rendering failed
    #[error(transparent)]
    View(#[from] hir_view::ViewError),

    /// Required argument absent from the parsed command line
    #[error("missing argument: --{0}")]
    MissingArgument(&'static str),
}

impl DashboardError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
