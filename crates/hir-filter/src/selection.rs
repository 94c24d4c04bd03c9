//! Filter selection state
//!
//! A slot is either [`Selection::Unconstrained`] or a non-empty
//! [`ValueSet`]. There is no "empty list" state: building a selection from
//! no values yields `Unconstrained`, so "nothing selected" and "everything
//! filtered out" cannot be confused.

use crate::dimension::Dimension;
use crate::options::OptionSets;
use hir_records::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Non-empty set of chosen values for one dimension
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueSet(BTreeSet<String>);

impl ValueSet {
    /// Build from values, `None` if there are none
    pub fn new<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        (!set.is_empty()).then_some(Self(set))
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    /// Iterate in ascending order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of values (at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with collections
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keep only values present in the sorted `options`
    fn retain_in(&self, options: &[String]) -> Option<Self> {
        Self::new(
            self.0
                .iter()
                .filter(|value| options.binary_search(*value).is_ok())
                .cloned(),
        )
    }
}

/// One dimension's constraint
///
/// Serializes as `null` when unconstrained and as a sorted array of strings
/// otherwise; an empty array deserializes as unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Option<Vec<String>>")]
pub enum Selection {
    /// No constraint: every record matches
    #[default]
    Unconstrained,
    /// Records must match at least one of these values
    ValuesOf(ValueSet),
}

impl Selection {
    /// Selection of the given values; unconstrained if there are none
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueSet::new(values).map_or(Self::Unconstrained, Self::ValuesOf)
    }

    /// Check if slot carries no constraint
    #[inline]
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Self::Unconstrained)
    }

    /// Selected values, if constrained
    #[inline]
    #[must_use]
    pub fn value_set(&self) -> Option<&ValueSet> {
        match self {
            Self::Unconstrained => None,
            Self::ValuesOf(values) => Some(values),
        }
    }

    /// Iterate over selected values (none when unconstrained)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.value_set().into_iter().flat_map(ValueSet::iter)
    }

    /// Number of selected values
    #[must_use]
    pub fn len(&self) -> usize {
        self.value_set().map_or(0, ValueSet::len)
    }

    /// Check if no values are selected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_unconstrained()
    }

    /// Check a record against this slot on `dimension`
    #[must_use]
    pub fn admits(&self, dimension: Dimension, record: &Record) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::ValuesOf(values) => dimension.matches(record, values),
        }
    }

    /// Drop values missing from the sorted `options`
    ///
    /// A slot left with no values becomes unconstrained.
    #[must_use]
    pub fn corrected(&self, options: &[String]) -> Self {
        match self {
            Self::Unconstrained => Self::Unconstrained,
            Self::ValuesOf(values) => values
                .retain_in(options)
                .map_or(Self::Unconstrained, Self::ValuesOf),
        }
    }
}

impl From<Option<Vec<String>>> for Selection {
    fn from(value: Option<Vec<String>>) -> Self {
        value.map_or(Self::Unconstrained, Self::values)
    }
}

impl From<Selection> for Option<Vec<String>> {
    fn from(value: Selection) -> Self {
        match value {
            Selection::Unconstrained => None,
            Selection::ValuesOf(values) => Some(values.0.into_iter().collect()),
        }
    }
}

/// Selection state across all four dimensions
///
/// Values are replaced wholesale: [`FilterSelection::with`] returns a new
/// state instead of mutating a slot in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    categories: Selection,
    subcategories: Selection,
    locations: Selection,
    stakeholders: Selection,
}

impl FilterSelection {
    /// All dimensions unconstrained
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot for one dimension
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> &Selection {
        match dimension {
            Dimension::Category => &self.categories,
            Dimension::Subcategory => &self.subcategories,
            Dimension::Location => &self.locations,
            Dimension::Stakeholder => &self.stakeholders,
        }
    }

    /// Copy of this state with one slot replaced
    #[must_use]
    pub fn with(&self, dimension: Dimension, selection: Selection) -> Self {
        let mut next = self.clone();
        let slot = match dimension {
            Dimension::Category => &mut next.categories,
            Dimension::Subcategory => &mut next.subcategories,
            Dimension::Location => &mut next.locations,
            Dimension::Stakeholder => &mut next.stakeholders,
        };
        *slot = selection;
        next
    }

    /// Check if every dimension is unconstrained
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        Dimension::ALL
            .iter()
            .all(|&dim| self.get(dim).is_unconstrained())
    }

    /// Total number of selected values across dimensions
    #[must_use]
    pub fn selected_count(&self) -> usize {
        Dimension::ALL.iter().map(|&dim| self.get(dim).len()).sum()
    }

    /// Check a record against all four constraints
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        Dimension::ALL
            .iter()
            .all(|&dim| self.get(dim).admits(dim, record))
    }

    /// Check a record against every constraint except `excluded`'s own
    #[must_use]
    pub fn matches_except(&self, record: &Record, excluded: Dimension) -> bool {
        Dimension::ALL
            .iter()
            .filter(|&&dim| dim != excluded)
            .all(|&dim| self.get(dim).admits(dim, record))
    }

    /// Drop every selected value missing from its dimension's options
    #[must_use]
    pub fn corrected_by(&self, options: &OptionSets) -> Self {
        Self {
            categories: self.categories.corrected(options.get(Dimension::Category)),
            subcategories: self
                .subcategories
                .corrected(options.get(Dimension::Subcategory)),
            locations: self.locations.corrected(options.get(Dimension::Location)),
            stakeholders: self
                .stakeholders
                .corrected(options.get(Dimension::Stakeholder)),
        }
    }

    /// Dimensions whose slot differs from `other`'s
    pub fn changed_dimensions<'a>(
        &'a self,
        other: &'a Self,
    ) -> impl Iterator<Item = Dimension> + 'a {
        Dimension::ALL
            .into_iter()
            .filter(move |&dim| self.get(dim) != other.get(dim))
    }
}

/// The reset state: every dimension unconstrained, regardless of history
#[inline]
#[must_use]
pub fn clear() -> FilterSelection {
    FilterSelection::new()
}
