//! HIR Record Store
//!
//! Immutable, in-memory collection of housing initiatives loaded once at
//! startup.
//!
//! # Overview
//!
//! - **Record**: one initiative with its derived location and stakeholder tokens
//! - **RecordStore**: shared read-only handle over all records
//! - **TokenSet**: tokens extracted from a comma-delimited text cell
//! - **ImageCatalog**: capability check for "does an image exist for this id"
//! - **loader**: JSON/YAML dataset ingestion keyed by the sheet's column headers
//!
//! # Example
//!
//! ```rust
//! use hir_records::{extract_tokens, RecordBuilder, RecordStore};
//!
//! let record = RecordBuilder::new("I-1")
//!     .category("Supply")
//!     .location("NB, NS")
//!     .build();
//! let store = RecordStore::new(vec![record]).unwrap();
//!
//! assert!(store.get("I-1").unwrap().location_tokens().contains("NS"));
//! assert_eq!(extract_tokens(" , ").len(), 0);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod catalog;
mod error;
pub mod loader;
mod record;
mod store;
mod tokens;

// Re-exports
pub use catalog::{asset_url, AssetDirectory, ImageCatalog, StaticCatalog};
pub use error::LoadError;
pub use loader::{load_path, load_str, SourceFormat};
pub use record::{Record, RecordBuilder, Region, RegionStatuses};
pub use store::RecordStore;
pub use tokens::{extract_tokens, TokenSet, TOKEN_SEPARATOR};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
