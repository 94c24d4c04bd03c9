//! Initiative records
//!
//! A [`Record`] is immutable once built; its token sets are derived from the
//! location and stakeholder text exactly once, in [`RecordBuilder::build`].

use crate::tokens::{extract_tokens, TokenSet};
use serde::Serialize;
use std::fmt;

/// One housing initiative
///
/// Identity is the identifier: two records with the same id describe the
/// same initiative, and a [`RecordStore`](crate::RecordStore) refuses to
/// hold both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    id: String,
    initiative: String,
    category: String,
    subcategory: String,
    location: String,
    stakeholders: String,
    timeline: String,
    statuses: RegionStatuses,
    metric_notes: String,
    has_image: bool,
    #[serde(skip)]
    location_tokens: TokenSet,
    #[serde(skip)]
    stakeholder_tokens: TokenSet,
}

impl Record {
    /// Unique identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Initiative title
    #[inline]
    #[must_use]
    pub fn initiative(&self) -> &str {
        &self.initiative
    }

    /// Category, empty when the source cell was blank
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Sub-category, empty when the source cell was blank
    #[inline]
    #[must_use]
    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    /// Raw location text
    #[inline]
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Raw owner/contributor group text
    #[inline]
    #[must_use]
    pub fn stakeholders(&self) -> &str {
        &self.stakeholders
    }

    /// Timeline as displayed
    #[inline]
    #[must_use]
    pub fn timeline(&self) -> &str {
        &self.timeline
    }

    /// Per-region status values
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &RegionStatuses {
        &self.statuses
    }

    /// Metric notes
    #[inline]
    #[must_use]
    pub fn metric_notes(&self) -> &str {
        &self.metric_notes
    }

    /// Whether an image panel exists for this initiative
    #[inline]
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.has_image
    }

    /// Tokens of the location text
    #[inline]
    #[must_use]
    pub fn location_tokens(&self) -> &TokenSet {
        &self.location_tokens
    }

    /// Tokens of the stakeholder text
    #[inline]
    #[must_use]
    pub fn stakeholder_tokens(&self) -> &TokenSet {
        &self.stakeholder_tokens
    }
}

/// Region whose implementation status is tracked per initiative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// New Brunswick
    NewBrunswick,
    /// Nova Scotia
    NovaScotia,
    /// Prince Edward Island
    PrinceEdwardIsland,
    /// Newfoundland and Labrador
    NewfoundlandLabrador,
    /// Atlantic-wide
    Regional,
}

impl Region {
    /// All regions in grid column order
    pub const ALL: [Region; 5] = [
        Region::NewBrunswick,
        Region::NovaScotia,
        Region::PrinceEdwardIsland,
        Region::NewfoundlandLabrador,
        Region::Regional,
    ];

    /// Short column label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Region::NewBrunswick => "NB",
            Region::NovaScotia => "NS",
            Region::PrinceEdwardIsland => "PEI",
            Region::NewfoundlandLabrador => "NL",
            Region::Regional => "Regional",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status text per region; empty when the source cell was blank
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegionStatuses {
    /// New Brunswick
    pub nb: String,
    /// Nova Scotia
    pub ns: String,
    /// Prince Edward Island
    pub pei: String,
    /// Newfoundland and Labrador
    pub nl: String,
    /// Atlantic-wide
    pub regional: String,
}

impl RegionStatuses {
    /// Status text for one region
    #[must_use]
    pub fn get(&self, region: Region) -> &str {
        match region {
            Region::NewBrunswick => &self.nb,
            Region::NovaScotia => &self.ns,
            Region::PrinceEdwardIsland => &self.pei,
            Region::NewfoundlandLabrador => &self.nl,
            Region::Regional => &self.regional,
        }
    }

    /// Replace the status text for one region
    #[must_use]
    pub fn with(mut self, region: Region, status: impl Into<String>) -> Self {
        let slot = match region {
            Region::NewBrunswick => &mut self.nb,
            Region::NovaScotia => &mut self.ns,
            Region::PrinceEdwardIsland => &mut self.pei,
            Region::NewfoundlandLabrador => &mut self.nl,
            Region::Regional => &mut self.regional,
        };
        *slot = status.into();
        self
    }
}

/// Builder for [`Record`]
///
/// Every field except the identifier defaults to empty.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    id: String,
    initiative: String,
    category: String,
    subcategory: String,
    location: String,
    stakeholders: String,
    timeline: String,
    statuses: RegionStatuses,
    metric_notes: String,
    has_image: bool,
}

impl RecordBuilder {
    /// Start a record with the given identifier (trimmed)
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self {
            id: id.as_ref().trim().to_owned(),
            ..Self::default()
        }
    }

    /// Set the initiative title
    #[must_use]
    pub fn initiative(mut self, initiative: impl Into<String>) -> Self {
        self.initiative = initiative.into();
        self
    }

    /// Set the category
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the sub-category
    #[must_use]
    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    /// Set the delimited location text
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the delimited owner/contributor group text
    #[must_use]
    pub fn stakeholders(mut self, stakeholders: impl Into<String>) -> Self {
        self.stakeholders = stakeholders.into();
        self
    }

    /// Set the timeline text
    #[must_use]
    pub fn timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = timeline.into();
        self
    }

    /// Set all region statuses
    #[must_use]
    pub fn statuses(mut self, statuses: RegionStatuses) -> Self {
        self.statuses = statuses;
        self
    }

    /// Set one region status
    #[must_use]
    pub fn status(mut self, region: Region, status: impl Into<String>) -> Self {
        self.statuses = self.statuses.with(region, status);
        self
    }

    /// Set the metric notes
    #[must_use]
    pub fn metric_notes(mut self, notes: impl Into<String>) -> Self {
        self.metric_notes = notes.into();
        self
    }

    /// Mark whether an image exists for this record
    #[must_use]
    pub fn has_image(mut self, has_image: bool) -> Self {
        self.has_image = has_image;
        self
    }

    /// Identifier the record will carry
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Finish the record, deriving its token sets
    #[must_use]
    pub fn build(self) -> Record {
        let location_tokens = extract_tokens(&self.location);
        let stakeholder_tokens = extract_tokens(&self.stakeholders);
        Record {
            id: self.id,
            initiative: self.initiative,
            category: self.category,
            subcategory: self.subcategory,
            location: self.location,
            stakeholders: self.stakeholders,
            timeline: self.timeline,
            statuses: self.statuses,
            metric_notes: self.metric_notes,
            has_image: self.has_image,
            location_tokens,
            stakeholder_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_derives_tokens() {
        let record = RecordBuilder::new(" 12 ")
            .location("NB, NS")
            .stakeholders("Province,  Municipality ,")
            .build();

        assert_eq!(record.id(), "12");
        assert_eq!(record.location_tokens().len(), 2);
        assert!(record.stakeholder_tokens().contains("Municipality"));
        assert_eq!(record.stakeholder_tokens().len(), 2);
    }

    #[test]
    fn statuses_by_region() {
        let record = RecordBuilder::new("1")
            .status(Region::NovaScotia, "Pending")
            .status(Region::Regional, "-")
            .build();

        assert_eq!(record.statuses().get(Region::NovaScotia), "Pending");
        assert_eq!(record.statuses().get(Region::Regional), "-");
        assert_eq!(record.statuses().get(Region::NewBrunswick), "");
    }

    #[test]
    fn region_labels_follow_column_order() {
        let labels: Vec<_> = Region::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["NB", "NS", "PEI", "NL", "Regional"]);
    }

    #[test]
    fn only_the_identifier_is_trimmed() {
        let record = RecordBuilder::new(" 7 ").category(" Supply").subcategory("Modular ").build();
        assert_eq!(record.id(), "7");
        assert_eq!(record.category(), " Supply");
        assert_eq!(record.subcategory(), "Modular ");
    }
}
