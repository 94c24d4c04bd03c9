//! HIR View Projections
//!
//! Turns the filtered record sequence into what one dashboard tab shows.
//!
//! - [`ViewMode`]: the active tab, `tracking` by default
//! - [`project`]: records to gallery panels or grid rows, order preserved
//! - [`StatusClass`]: highlight class of a tracking status cell
//! - [`render_text`] / [`render_json`]: output for the command line
//!
//! # Example
//!
//! ```rust
//! use hir_records::RecordBuilder;
//! use hir_view::{project, ViewMode};
//!
//! let records = vec![RecordBuilder::new("3").initiative("Loan fund").build()];
//! let view = project(ViewMode::default(), &records);
//!
//! assert_eq!(view.mode(), ViewMode::Tracking);
//! assert_eq!(view.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod mode;
mod render;
mod status;
mod view;

// Re-exports
pub use error::ViewError;
pub use mode::ViewMode;
pub use render::{render_json, render_text};
pub use status::{StatusCell, StatusClass};
pub use view::{
    project, ImagePanel, InitiativeRow, TrackingRow, View, INITIATIVE_COLUMNS,
    TRACKING_COLUMNS,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
