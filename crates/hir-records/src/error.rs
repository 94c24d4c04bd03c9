//! Error types for dataset loading
//!
//! Loading is the only fallible stage of the dashboard. Every variant is
//! startup-fatal: the dataset is static input, so nothing is retried.

use std::path::PathBuf;

/// Errors while building the record store
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// No reader for the dataset file extension
    #[error("unsupported dataset extension: '{0}'")]
    UnsupportedExtension(String),

    /// Malformed JSON, or a row missing a required column
    #[error("invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML, or a row missing a required column
    #[error("invalid YAML dataset: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Row without an identifier
    #[error("row {row} has a blank identifier")]
    BlankIdentifier {
        /// Zero-based row index
        row: usize,
    },

    /// Two rows share an identifier
    #[error("duplicate identifier: {id}")]
    DuplicateIdentifier {
        /// The repeated identifier
        id: String,
    },
}

impl LoadError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
