//! HIR Filter Engine
//!
//! Cascading multi-select filtering over an immutable [`RecordStore`].
//!
//! # Core Concepts
//!
//! - [`Dimension`]: the four filter axes (category, sub-category, location,
//!   stakeholder)
//! - [`Selection`]: one axis' constraint, `Unconstrained` or a non-empty set
//! - [`FilterSelection`]: the four slots together, replaced wholesale
//! - [`resolve`]: rows, self-excluding option sets and corrected selection
//! - [`FilterSession`]: event-loop adapter committing one frame per action
//!
//! # Example
//!
//! ```rust
//! use hir_filter::{clear, resolve, Dimension, Selection};
//! use hir_records::RecordBuilder;
//!
//! let records = vec![
//!     RecordBuilder::new("R1").category("A").location("NB, NS").build(),
//!     RecordBuilder::new("R2").category("B").location("NB").build(),
//! ];
//!
//! let selection = clear().with(Dimension::Location, Selection::values(["NS"]));
//! let resolution = resolve(&selection, &records);
//!
//! assert_eq!(resolution.filtered_ids().collect::<Vec<_>>(), vec!["R1"]);
//! assert_eq!(resolution.options.get(Dimension::Category), ["A"]);
//! assert_eq!(resolution.options.get(Dimension::Location), ["NB", "NS"]);
//! ```
//!
//! [`RecordStore`]: hir_records::RecordStore

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod dimension;
mod engine;
mod error;
mod options;
mod selection;
mod session;

// Re-exports
pub use dimension::Dimension;
pub use engine::{resolve, FilterEngine, Resolution};
pub use error::FilterError;
pub use options::OptionSets;
pub use selection::{clear, FilterSelection, Selection, ValueSet};
pub use session::{Action, FilterSession, Frame};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for filtering
    pub use crate::{
        clear, resolve, Action, Dimension, FilterEngine, FilterSelection,
        FilterSession, Frame, OptionSets, Resolution, Selection,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
