//! Deduplicating store for the records of one aggregation run.

use super::ComponentRecord;
use indexmap::IndexSet;

/// Holds the deduplicated set of component records.
///
/// Insertion order is preserved for debuggability but must never leak into
/// output; the aggregators apply explicit sorts on every grouping dimension,
/// so results are independent of file-discovery order.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: IndexSet<ComponentRecord>,
}

impl RecordStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning `true` if it was not already present.
    pub fn insert(&mut self, record: ComponentRecord) -> bool {
        self.records.insert(record)
    }

    /// Merge a batch of records, typically one loader file's worth.
    pub fn extend(&mut self, records: impl IntoIterator<Item = ComponentRecord>) {
        for record in records {
            self.insert(record);
        }
    }

    /// Iterate over the deduplicated records
    pub fn iter(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.records.iter()
    }

    /// Number of distinct records held
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<ComponentRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = ComponentRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
