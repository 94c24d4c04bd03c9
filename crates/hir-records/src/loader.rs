//! Dataset ingestion
//!
//! The initiative sheet is exported as a JSON array or YAML sequence of rows,
//! each row an object keyed by the sheet's column headers:
//!
//! ```json
//! [{ "ID": 12, "Category": "Supply", "Sub-Category": "Modular",
//!    "Initiative": "...", "Location Identified": "NB, NS",
//!    "Filtering-Contributors-Categories": "Province", "Timeline": 2026,
//!    "NB Status": "Pending", "NS Status": "-", "PEI Status": null,
//!    "NL Status": null, "Regional": "In progress", "Metric Notes": null }]
//! ```
//!
//! Every column must be present in every row; cells may be null, text,
//! numbers or booleans and are normalized to text.

use crate::catalog::ImageCatalog;
use crate::error::LoadError;
use crate::record::{Record, RecordBuilder, RegionStatuses};
use crate::store::RecordStore;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Serialized form of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// JSON array of row objects
    Json,
    /// YAML sequence of row mappings
    Yaml,
}

impl SourceFormat {
    /// Pick the format from a file extension
    ///
    /// # Errors
    /// Returns [`LoadError::UnsupportedExtension`] for anything but
    /// `.json`, `.yaml` or `.yml`
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(LoadError::UnsupportedExtension(ext)),
        }
    }
}

/// A spreadsheet cell as exported
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum Cell {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    fn into_text(self) -> String {
        match self {
            Cell::Text(text) => text,
            Cell::Integer(n) => n.to_string(),
            // spreadsheets hand whole numbers back as floats
            #[allow(clippy::cast_possible_truncation)]
            Cell::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 => {
                (x as i64).to_string()
            }
            Cell::Float(x) => x.to_string(),
            Cell::Flag(b) => b.to_string(),
        }
    }
}

/// Required column whose cell may be null
///
/// Using `deserialize_with` keeps serde from treating a missing column as
/// `None`, so an absent header is reported as an error.
fn cell<'de, D>(deserializer: D) -> Result<Option<Cell>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Cell>::deserialize(deserializer)
}

/// One row of the initiative sheet
#[derive(Debug, Deserialize)]
struct SourceRow {
    #[serde(rename = "ID", deserialize_with = "cell")]
    id: Option<Cell>,
    #[serde(rename = "Category", deserialize_with = "cell")]
    category: Option<Cell>,
    #[serde(rename = "Sub-Category", deserialize_with = "cell")]
    subcategory: Option<Cell>,
    #[serde(rename = "Initiative", deserialize_with = "cell")]
    initiative: Option<Cell>,
    #[serde(rename = "Location Identified", deserialize_with = "cell")]
    location: Option<Cell>,
    #[serde(rename = "Filtering-Contributors-Categories", deserialize_with = "cell")]
    stakeholders: Option<Cell>,
    #[serde(rename = "Timeline", deserialize_with = "cell")]
    timeline: Option<Cell>,
    #[serde(rename = "NB Status", deserialize_with = "cell")]
    nb_status: Option<Cell>,
    #[serde(rename = "NS Status", deserialize_with = "cell")]
    ns_status: Option<Cell>,
    #[serde(rename = "PEI Status", deserialize_with = "cell")]
    pei_status: Option<Cell>,
    #[serde(rename = "NL Status", deserialize_with = "cell")]
    nl_status: Option<Cell>,
    #[serde(rename = "Regional", deserialize_with = "cell")]
    regional: Option<Cell>,
    #[serde(rename = "Metric Notes", deserialize_with = "cell")]
    metric_notes: Option<Cell>,
}

fn text(cell: Option<Cell>) -> String {
    cell.map(Cell::into_text).unwrap_or_default()
}

impl SourceRow {
    fn into_record(self, row: usize, catalog: &dyn ImageCatalog) -> Result<Record, LoadError> {
        let builder = RecordBuilder::new(text(self.id));
        if builder.id().is_empty() {
            return Err(LoadError::BlankIdentifier { row });
        }

        let has_image = catalog.has_image(builder.id());
        Ok(builder
            .initiative(text(self.initiative))
            .category(text(self.category))
            .subcategory(text(self.subcategory))
            .location(text(self.location))
            .stakeholders(text(self.stakeholders))
            .timeline(text(self.timeline))
            .statuses(RegionStatuses {
                nb: text(self.nb_status),
                ns: text(self.ns_status),
                pei: text(self.pei_status),
                nl: text(self.nl_status),
                regional: text(self.regional),
            })
            .metric_notes(text(self.metric_notes))
            .has_image(has_image)
            .build())
    }
}

/// Parse dataset text into a record store
///
/// # Errors
/// Returns error if the text is malformed, a column is missing, an
/// identifier is blank or repeated
pub fn load_str(
    source: &str,
    format: SourceFormat,
    catalog: &dyn ImageCatalog,
) -> Result<RecordStore, LoadError> {
    let rows: Vec<SourceRow> = match format {
        SourceFormat::Json => serde_json::from_str(source)?,
        SourceFormat::Yaml => serde_yaml::from_str(source)?,
    };

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(row, source_row)| source_row.into_record(row, catalog))
        .collect::<Result<Vec<_>, _>>()?;

    RecordStore::new(records)
}

/// Read and parse a dataset file, choosing the format from its extension
///
/// # Errors
/// Returns error if the file cannot be read or [`load_str`] fails
pub fn load_path(path: &Path, catalog: &dyn ImageCatalog) -> Result<RecordStore, LoadError> {
    let format = SourceFormat::from_path(path)?;
    let source = std::fs::read_to_string(path).map_err(|e| LoadError::io_error(path, e))?;

    let store = load_str(&source, format, catalog)?;
    tracing::info!(
        path = %path.display(),
        records = store.len(),
        images = store.image_count(),
        "Loaded initiative dataset"
    );
    Ok(store)
}
