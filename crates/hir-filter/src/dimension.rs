//! Filter dimensions
//!
//! Four independent axes. Category and sub-category are scalar fields;
//! location and stakeholder are token sets, matched by intersection.

use crate::error::FilterError;
use crate::selection::ValueSet;
use hir_records::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One filter axis
///
/// Deserializes through [`FromStr`], so scripts may use any accepted alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Dimension {
    /// Record category
    Category,
    /// Record sub-category
    Subcategory,
    /// Location tokens
    Location,
    /// Owner/contributor group tokens
    Stakeholder,
}

impl Dimension {
    /// All dimensions in sidebar order
    pub const ALL: [Dimension; 4] = [
        Dimension::Category,
        Dimension::Subcategory,
        Dimension::Location,
        Dimension::Stakeholder,
    ];

    /// Machine name, as accepted by [`FromStr`]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Dimension::Category => "category",
            Dimension::Subcategory => "subcategory",
            Dimension::Location => "location",
            Dimension::Stakeholder => "stakeholder",
        }
    }

    /// Human-facing dropdown label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Category => "Category",
            Dimension::Subcategory => "Sub-category",
            Dimension::Location => "Location",
            Dimension::Stakeholder => "Owner/Contributor Group",
        }
    }

    /// Check a record against a non-empty constraint on this dimension
    ///
    /// Scalars match by equality with a selected value; token sets match when
    /// any token equals a selected value. Blank scalars never match.
    pub(crate) fn matches(self, record: &Record, values: &ValueSet) -> bool {
        match self {
            Dimension::Category => scalar_matches(record.category(), values),
            Dimension::Subcategory => scalar_matches(record.subcategory(), values),
            Dimension::Location => record.location_tokens().iter().any(|t| values.contains(t)),
            Dimension::Stakeholder => record
                .stakeholder_tokens()
                .iter()
                .any(|t| values.contains(t)),
        }
    }

    /// Add the record's values on this dimension to `out`
    pub(crate) fn collect_values<'r>(self, record: &'r Record, out: &mut BTreeSet<&'r str>) {
        match self {
            Dimension::Category => insert_scalar(record.category(), out),
            Dimension::Subcategory => insert_scalar(record.subcategory(), out),
            Dimension::Location => out.extend(record.location_tokens().iter()),
            Dimension::Stakeholder => out.extend(record.stakeholder_tokens().iter()),
        }
    }
}

fn scalar_matches(value: &str, values: &ValueSet) -> bool {
    !value.is_empty() && values.contains(value)
}

fn insert_scalar<'r>(value: &'r str, out: &mut BTreeSet<&'r str>) {
    if !value.is_empty() {
        out.insert(value);
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "category" | "categories" => Ok(Dimension::Category),
            "subcategory" | "subcategories" | "sub-category" => Ok(Dimension::Subcategory),
            "location" | "locations" => Ok(Dimension::Location),
            "stakeholder" | "stakeholders" => Ok(Dimension::Stakeholder),
            _ => Err(FilterError::UnknownDimension(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Dimension {
    type Error = FilterError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hir_records::RecordBuilder;

    fn values(items: &[&str]) -> ValueSet {
        ValueSet::new(items.iter().copied()).unwrap()
    }

    #[test]
    fn scalar_match_is_equality() {
        let record = RecordBuilder::new("1").category("Supply").build();
        assert!(Dimension::Category.matches(&record, &values(&["Supply", "Finance"])));
        assert!(!Dimension::Category.matches(&record, &values(&["Supp"])));
    }

    #[test]
    fn blank_scalar_never_matches() {
        let record = RecordBuilder::new("1").build();
        assert!(!Dimension::Subcategory.matches(&record, &values(&[""])));
    }

    #[test]
    fn token_match_is_intersection() {
        let record = RecordBuilder::new("1").location("NB, NS").build();
        assert!(Dimension::Location.matches(&record, &values(&["PEI", "NS"])));
        assert!(!Dimension::Location.matches(&record, &values(&["N"])));
    }

    #[test]
    fn collect_skips_blank_scalars() {
        let record = RecordBuilder::new("1").stakeholders("Province, Industry").build();
        let mut out = BTreeSet::new();
        Dimension::Category.collect_values(&record, &mut out);
        assert!(out.is_empty());

        Dimension::Stakeholder.collect_values(&record, &mut out);
        assert_eq!(out.into_iter().collect::<Vec<_>>(), vec!["Industry", "Province"]);
    }

    #[test]
    fn parse_names() {
        assert_eq!("locations".parse::<Dimension>().unwrap(), Dimension::Location);
        assert_eq!("Sub-Category".parse::<Dimension>().unwrap(), Dimension::Subcategory);
        assert!(matches!(
            "region".parse::<Dimension>(),
            Err(FilterError::UnknownDimension(name)) if name == "region"
        ));
    }

    #[test]
    fn deserializes_aliases() {
        let dims: Vec<Dimension> =
            serde_json::from_str(r#"["Sub-Category", "locations", "stakeholder"]"#).unwrap();
        assert_eq!(
            dims,
            vec![Dimension::Subcategory, Dimension::Location, Dimension::Stakeholder]
        );

        let err = serde_json::from_str::<Dimension>(r#""region""#).unwrap_err();
        assert!(err.to_string().contains("unknown filter dimension: 'region'"));
    }

    #[test]
    fn keys_round_trip_through_parse() {
        for dim in Dimension::ALL {
            assert_eq!(dim.key().parse::<Dimension>().unwrap(), dim);
        }
    }
}
