//! Read-only dataset handle

use std::ops::Deref;
use std::sync::Arc;

use crate::models::{DiabetesStatus, HealthRecord, RecordId};

/// The normalized, scored survey population
///
/// Cloning is cheap and shares the same records. There is no API that
/// mutates a record once it is in the dataset.
#[derive(Debug, Clone)]
pub struct HealthDataset {
    records: Arc<[HealthRecord]>,
}

impl HealthDataset {
    /// Freeze a vector of normalized records into a dataset
    ///
    /// Records must be sorted by ascending identifier, as the loader and
    /// the synthetic generator produce them; [`HealthDataset::get`] relies
    /// on it.
    #[must_use]
    pub fn new(records: Vec<HealthRecord>) -> Self {
        debug_assert!(
            records.windows(2).all(|pair| pair[0].id() < pair[1].id()),
            "dataset records must have strictly ascending ids"
        );
        Self {
            records: records.into(),
        }
    }

    /// Create an empty dataset
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// All records in load order
    #[must_use]
    pub fn records(&self) -> &[HealthRecord] {
        &self.records
    }

    /// Find a record by identifier
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&HealthRecord> {
        self.records
            .binary_search_by_key(&id, HealthRecord::id)
            .ok()
            .map(|i| &self.records[i])
    }

    /// Records matching a predicate
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Vec<&HealthRecord>
    where
        F: Fn(&HealthRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Number of records with the given outcome
    #[must_use]
    pub fn count_status(&self, status: DiabetesStatus) -> usize {
        self.records
            .iter()
            .filter(|r| r.diabetes_status() == status)
            .count()
    }
}

impl Default for HealthDataset {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for HealthDataset {
    type Target = [HealthRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<Vec<HealthRecord>> for HealthDataset {
    fn from(records: Vec<HealthRecord>) -> Self {
        Self::new(records)
    }
}
