//! Tab projections
//!
//! [`project`] maps already-filtered records onto the rows of one tab. It
//! never filters; the dashboard tab only skips records without an image.

use crate::mode::ViewMode;
use crate::status::StatusCell;
use hir_records::{asset_url, Record, Region};
use serde::Serialize;

/// Header captions of the initiatives grid
pub const INITIATIVE_COLUMNS: [&str; 4] =
    ["Initiative", "Category", "Location Identified", "Timeline"];

/// Header captions of the tracking grid
pub const TRACKING_COLUMNS: [&str; 8] = [
    "Initiative",
    "Category",
    "NB",
    "NS",
    "PEI",
    "NL",
    "Regional",
    "Metric Notes",
];

/// Dashboard image panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImagePanel {
    /// Initiative identifier
    pub id: String,
    /// Public asset path
    pub src: String,
}

/// Initiatives grid row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitiativeRow {
    /// Initiative identifier
    pub id: String,
    /// Title
    pub initiative: String,
    /// Category
    pub category: String,
    /// Location Identified
    pub location: String,
    /// Timeline
    pub timeline: String,
}

impl InitiativeRow {
    /// Cell texts in [`INITIATIVE_COLUMNS`] order
    #[must_use]
    pub fn cells(&self) -> [&str; 4] {
        [&self.initiative, &self.category, &self.location, &self.timeline]
    }
}

/// Tracking grid row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingRow {
    /// Initiative identifier
    pub id: String,
    /// Title
    pub initiative: String,
    /// Category
    pub category: String,
    /// New Brunswick status
    pub nb: StatusCell,
    /// Nova Scotia status
    pub ns: StatusCell,
    /// Prince Edward Island status
    pub pei: StatusCell,
    /// Newfoundland and Labrador status
    pub nl: StatusCell,
    /// Atlantic-wide status
    pub regional: StatusCell,
    /// Metric Notes
    pub metric_notes: String,
}

impl TrackingRow {
    /// Status cell for one region
    #[must_use]
    pub fn status(&self, region: Region) -> &StatusCell {
        match region {
            Region::NewBrunswick => &self.nb,
            Region::NovaScotia => &self.ns,
            Region::PrinceEdwardIsland => &self.pei,
            Region::NewfoundlandLabrador => &self.nl,
            Region::Regional => &self.regional,
        }
    }
}

/// Projected tab contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "rows", rename_all = "lowercase")]
pub enum View {
    /// Image gallery
    Dashboard(Vec<ImagePanel>),
    /// Initiatives grid
    Initiatives(Vec<InitiativeRow>),
    /// Tracking grid
    Tracking(Vec<TrackingRow>),
}

impl View {
    /// Tab this view belongs to
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        match self {
            View::Dashboard(_) => ViewMode::Dashboard,
            View::Initiatives(_) => ViewMode::Initiatives,
            View::Tracking(_) => ViewMode::Tracking,
        }
    }

    /// Number of panels or rows
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            View::Dashboard(panels) => panels.len(),
            View::Initiatives(rows) => rows.len(),
            View::Tracking(rows) => rows.len(),
        }
    }

    /// Whether nothing would be shown
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Project filtered records onto the rows of `mode`, keeping their order
pub fn project<'a, I>(mode: ViewMode, records: I) -> View
where
    I: IntoIterator<Item = &'a Record>,
{
    let records = records.into_iter();
    match mode {
        ViewMode::Dashboard => View::Dashboard(
            records
                .filter(|record| record.has_image())
                .map(|record| ImagePanel {
                    id: record.id().to_string(),
                    src: asset_url(record.id()),
                })
                .collect(),
        ),
        ViewMode::Initiatives => View::Initiatives(
            records
                .map(|record| InitiativeRow {
                    id: record.id().to_string(),
                    initiative: record.initiative().to_string(),
                    category: record.category().to_string(),
                    location: record.location().to_string(),
                    timeline: record.timeline().to_string(),
                })
                .collect(),
        ),
        ViewMode::Tracking => View::Tracking(records.map(tracking_row).collect()),
    }
}

fn tracking_row(record: &Record) -> TrackingRow {
    let statuses = record.statuses();
    TrackingRow {
        id: record.id().to_string(),
        initiative: record.initiative().to_string(),
        category: record.category().to_string(),
        nb: StatusCell::new(statuses.nb.as_str()),
        ns: StatusCell::new(statuses.ns.as_str()),
        pei: StatusCell::new(statuses.pei.as_str()),
        nl: StatusCell::new(statuses.nl.as_str()),
        regional: StatusCell::new(statuses.regional.as_str()),
        metric_notes: record.metric_notes().to_string(),
    }
}
