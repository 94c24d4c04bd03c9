//! HIR Dashboard
//!
//! Command-line front end over the record store, filter engine and view
//! projections. The `housing-dashboard` binary wires these together:
//!
//! 1. load [`DashboardConfig`] from TOML and apply flag overrides
//! 2. load the dataset, checking the asset directory for images
//! 3. run `resolve`, `view` or `replay` and print the result
//!
//! Logs go to stderr, so stdout can be piped when `--json` is given.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod report;
pub mod script;

// Re-exports
pub use commands::run;
pub use config::{DashboardConfig, LogFormat, DEFAULT_CONFIG_PATH};
pub use error::DashboardError;
pub use report::{replay, ReplayStep, ResolveReport};
pub use script::{load_script, parse_script, ReplayEvent, ScriptFormat};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
