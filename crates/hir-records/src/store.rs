//! Shared read-only record store
//!
//! Provides [`RecordStore`], the immutable handle the filter engine reads.

use crate::error::LoadError;
use crate::record::Record;
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable collection of records in dataset order
///
/// Cloning is cheap (one `Arc` bump), so the handle can be injected into as
/// many readers as needed without locking.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    records: Vec<Record>,
    by_id: HashMap<String, usize>,
}

impl RecordStore {
    /// Build a store from records in dataset order
    ///
    /// # Errors
    /// Returns [`LoadError::DuplicateIdentifier`] if two records share an id
    pub fn new(records: Vec<Record>) -> Result<Self, LoadError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if by_id.insert(record.id().to_owned(), position).is_some() {
                return Err(LoadError::DuplicateIdentifier {
                    id: record.id().to_owned(),
                });
            }
        }

        Ok(Self {
            inner: Arc::new(StoreInner { records, by_id }),
        })
    }

    /// Store with no records
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// All records in dataset order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.inner.records
    }

    /// Iterate over records in dataset order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.inner.records.iter()
    }

    /// Lookup by identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.inner
            .by_id
            .get(id)
            .map(|&position| &self.inner.records[position])
    }

    /// Check if a record with this identifier exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.inner.by_id.contains_key(id)
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.records.len()
    }

    /// Check if store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.records.is_empty()
    }

    /// Number of records with an image panel
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.iter().filter(|record| record.has_image()).count()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
