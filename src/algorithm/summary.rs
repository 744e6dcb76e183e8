//! Completion summary for a record

use std::fmt;

use serde::Serialize;

use crate::models::dose::{DOSE_COUNT, Dose};
use crate::models::record::ImmunizationRecord;
use crate::models::status::{CompletionLabel, ImmunizationStatus};

/// Aggregate completion of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionSummary {
    /// Doses given
    pub completed_count: usize,
    /// Size of the fixed schedule
    pub total_count: usize,
    /// Completion label
    pub label: CompletionLabel,
}

impl CompletionSummary {
    /// Summary for a completed count against the fixed schedule size
    #[must_use]
    pub const fn from_completed(completed_count: usize) -> Self {
        Self {
            completed_count,
            total_count: DOSE_COUNT,
            label: CompletionLabel::from_counts(completed_count, DOSE_COUNT),
        }
    }

    /// Summary from per-dose statuses; only `Given` counts as completed
    #[must_use]
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = ImmunizationStatus>,
    {
        let completed = statuses
            .into_iter()
            .filter(|status| *status == ImmunizationStatus::Given)
            .count();
        Self::from_completed(completed)
    }

    /// Summary of the scheduled doses given in a record
    #[must_use]
    pub fn of_record(record: &ImmunizationRecord) -> Self {
        Self::from_completed(Dose::ALL.iter().filter(|dose| record.is_given(**dose)).count())
    }

    /// Whether every dose has been given
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.label == CompletionLabel::Complete
    }
}

impl fmt::Display for CompletionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} dari {})",
            self.label, self.completed_count, self.total_count
        )
    }
}
