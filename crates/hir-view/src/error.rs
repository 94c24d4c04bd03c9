//! Error types for view projection

/// Errors selecting or serializing a view
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// Tab name not recognised
    #[error("unknown view '{0}' (expected dashboard, initiatives or tracking)")]
    UnknownViewMode(String),

    /// JSON rendering failed
    #[error("failed to serialize view: {0}")]
    Json(#[from] serde_json::Error),
}
