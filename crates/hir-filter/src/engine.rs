//! Cascading filter resolution
//!
//! [`resolve`] is a pure function of a selection and the records:
//!
//! 1. each dimension's options come from the records matching the *other*
//!    three constraints (self-exclusion), so a dropdown keeps offering
//!    alternatives after a value is picked;
//! 2. the displayed rows match all four constraints as given;
//! 3. each slot is corrected down to the values its options still offer.
//!
//! Correction is a single pass, and one pass is enough: resolving the
//! corrected selection again drops nothing further. Rows are still computed
//! from the uncorrected input, so a caller that renders must resolve the
//! corrected selection once more (see [`FilterSession`](crate::FilterSession)).

use crate::dimension::Dimension;
use crate::options::OptionSets;
use crate::selection::{clear, FilterSelection};
use hir_records::{Record, RecordStore};
use serde::Serialize;
use std::collections::BTreeSet;

/// Output of one resolve pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution<'a> {
    /// Records matching the input selection, in dataset order
    pub filtered: Vec<&'a Record>,
    /// Options per dimension, computed with self-exclusion
    pub options: OptionSets,
    /// Input selection with values missing from `options` dropped
    pub corrected: FilterSelection,
}

impl Resolution<'_> {
    /// Identifiers of the filtered records
    pub fn filtered_ids(&self) -> impl Iterator<Item = &str> {
        self.filtered.iter().map(|record| record.id())
    }
}

/// Resolve `selection` against `records`
///
/// Total: unknown values simply match nothing and are corrected away.
#[must_use]
pub fn resolve<'a>(selection: &FilterSelection, records: &'a [Record]) -> Resolution<'a> {
    let mut options = OptionSets::default();
    for dimension in Dimension::ALL {
        options.set(dimension, option_values(selection, records, dimension));
    }

    let filtered: Vec<&Record> = records
        .iter()
        .filter(|record| selection.matches(record))
        .collect();

    let corrected = selection.corrected_by(&options);

    tracing::debug!(
        rows = filtered.len(),
        categories = options.get(Dimension::Category).len(),
        subcategories = options.get(Dimension::Subcategory).len(),
        locations = options.get(Dimension::Location).len(),
        stakeholders = options.get(Dimension::Stakeholder).len(),
        corrected = corrected != *selection,
        "Resolved filter selection"
    );

    Resolution {
        filtered,
        options,
        corrected,
    }
}

/// Distinct values of `dimension` among records admitted by the other slots
fn option_values(
    selection: &FilterSelection,
    records: &[Record],
    dimension: Dimension,
) -> Vec<String> {
    let mut values = BTreeSet::new();
    for record in records
        .iter()
        .filter(|record| selection.matches_except(record, dimension))
    {
        dimension.collect_values(record, &mut values);
    }
    values.into_iter().map(str::to_owned).collect()
}

/// Filter engine bound to a record store
///
/// Thin handle that injects the store into [`resolve`]; cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    store: RecordStore,
}

impl FilterEngine {
    /// Engine over `store`
    #[inline]
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// The records being filtered
    #[inline]
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Resolve a selection against the store
    #[inline]
    #[must_use]
    pub fn resolve(&self, selection: &FilterSelection) -> Resolution<'_> {
        resolve(selection, self.store.records())
    }

    /// Resolution of the cleared state
    #[inline]
    #[must_use]
    pub fn initial(&self) -> Resolution<'_> {
        self.resolve(&clear())
    }
}
