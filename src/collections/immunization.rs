//! Immunization record collection
//!
//! Holds the immunization entries of one snapshot, searchable by child name
//! the way the list page filters them, with bulk summaries computed in
//! parallel.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use itertools::Itertools;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::ModelCollection;
use crate::algorithm::summary::CompletionSummary;
use crate::config::DateFormatConfig;
use crate::error::Result;
use crate::evaluator::ImmunizationEvaluator;
use crate::models::record::{ImmunizationRecord, StoredImmunizationRecord};
use crate::models::status::CompletionLabel;
use crate::utils::logging::log_operation_complete;

/// A collection of immunization records keyed by storage key
#[derive(Debug, Default, Clone)]
pub struct ImmunizationCollection {
    records: FxHashMap<String, Arc<ImmunizationRecord>>,
}

impl ImmunizationCollection {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from a stored snapshot (`key -> entry`)
    ///
    /// Entries that cannot be read are logged and skipped; the rest load.
    #[must_use]
    pub fn from_snapshot(
        snapshot: &BTreeMap<String, StoredImmunizationRecord>,
        config: &DateFormatConfig,
    ) -> Self {
        let mut collection = Self::new();
        for (key, stored) in snapshot {
            match ImmunizationRecord::from_stored(stored, config) {
                Ok(record) => collection.add(key.clone(), record),
                Err(e) => log::warn!("Skipping immunization entry '{key}': {e}"),
            }
        }
        collection
    }

    /// Parse a snapshot from JSON text, as read from the `imunisasi` node
    pub fn from_json(json: &str, config: &DateFormatConfig) -> Result<Self> {
        let snapshot: Option<BTreeMap<String, StoredImmunizationRecord>> =
            serde_json::from_str(json)?;
        Ok(snapshot.map_or_else(Self::new, |s| Self::from_snapshot(&s, config)))
    }

    /// Records with their keys, ordered by key
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &Arc<ImmunizationRecord>)> {
        self.records
            .iter()
            .map(|(key, record)| (key.as_str(), record))
            .sorted_by(|a, b| a.0.cmp(b.0))
            .collect()
    }

    /// Record linked to a child
    #[must_use]
    pub fn by_child(&self, child_id: &str) -> Option<Arc<ImmunizationRecord>> {
        self.records
            .values()
            .find(|record| record.child_id == child_id)
            .cloned()
    }

    /// Case-insensitive substring search on the child name
    ///
    /// An empty query matches every record. Results are ordered by name.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Arc<ImmunizationRecord>> {
        let needle = query.trim().to_lowercase();
        self.filter(|record| record.child_name.to_lowercase().contains(&needle))
            .into_iter()
            .sorted_by(|a, b| a.child_name.cmp(&b.child_name))
            .collect()
    }

    /// Completion summaries of every record, ordered by key
    #[must_use]
    pub fn summaries(
        &self,
        evaluator: &ImmunizationEvaluator,
        today: NaiveDate,
    ) -> Vec<(String, CompletionSummary)> {
        let start = Instant::now();
        let mut summaries: Vec<(String, CompletionSummary)> = self
            .records
            .par_iter()
            .map(|(key, record)| (key.clone(), evaluator.summary(record, today)))
            .collect();
        summaries.sort_by(|a, b| a.0.cmp(&b.0));
        log_operation_complete("summarized", summaries.len(), Some(start.elapsed()));
        summaries
    }

    /// Number of records per completion label
    #[must_use]
    pub fn label_counts(
        &self,
        evaluator: &ImmunizationEvaluator,
        today: NaiveDate,
    ) -> BTreeMap<CompletionLabel, usize> {
        self.summaries(evaluator, today)
            .into_iter()
            .map(|(_, summary)| summary.label)
            .counts()
            .into_iter()
            .collect()
    }
}

impl ModelCollection<ImmunizationRecord> for ImmunizationCollection {
    fn add(&mut self, id: impl Into<String>, record: ImmunizationRecord) {
        self.records.insert(id.into(), Arc::new(record));
    }

    fn get(&self, id: &str) -> Option<Arc<ImmunizationRecord>> {
        self.records.get(id).cloned()
    }

    fn remove(&mut self, id: &str) -> Option<Arc<ImmunizationRecord>> {
        self.records.remove(id)
    }

    fn all(&self) -> Vec<Arc<ImmunizationRecord>> {
        self.entries()
            .into_iter()
            .map(|(_, record)| Arc::clone(record))
            .collect()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<ImmunizationRecord>>
    where
        F: Fn(&ImmunizationRecord) -> bool,
    {
        self.records
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    fn count(&self) -> usize {
        self.records.len()
    }
}
