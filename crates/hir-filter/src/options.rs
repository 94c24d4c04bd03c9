//! Per-dimension option sets

use crate::dimension::Dimension;
use serde::Serialize;

/// Sorted, deduplicated values available in each dimension's dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionSets {
    categories: Vec<String>,
    subcategories: Vec<String>,
    locations: Vec<String>,
    stakeholders: Vec<String>,
}

impl OptionSets {
    /// Options for one dimension, ascending
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Category => &self.categories,
            Dimension::Subcategory => &self.subcategories,
            Dimension::Location => &self.locations,
            Dimension::Stakeholder => &self.stakeholders,
        }
    }

    /// Check if `value` is offered on `dimension`
    #[must_use]
    pub fn contains(&self, dimension: Dimension, value: &str) -> bool {
        self.get(dimension)
            .binary_search_by(|option| option.as_str().cmp(value))
            .is_ok()
    }

    /// Caller guarantees `values` is sorted and deduplicated
    pub(crate) fn set(&mut self, dimension: Dimension, values: Vec<String>) {
        debug_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        match dimension {
            Dimension::Category => self.categories = values,
            Dimension::Subcategory => self.subcategories = values,
            Dimension::Location => self.locations = values,
            Dimension::Stakeholder => self.stakeholders = values,
        }
    }
}
