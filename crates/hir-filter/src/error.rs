//! Error types for the filter crate
//!
//! Resolution itself never fails; these cover parsing names supplied from
//! outside (command line, replay scripts).

/// Errors parsing filter vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Name does not denote a filter dimension
    #[error("unknown filter dimension: '{0}'")]
    UnknownDimension(String),
}
