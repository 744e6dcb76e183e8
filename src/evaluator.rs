//! Immunization evaluator
//!
//! Bundles a schedule table and configuration behind the operations callers
//! use: status, summary, checklist, and the mark/unmark mutations. The
//! evaluator holds no mutable state and never reads the clock; `today` and
//! action dates are always passed in, so it can be shared freely across
//! threads.

use chrono::NaiveDate;

use crate::algorithm::age::{age_as_string, age_in_months_with};
use crate::algorithm::checklist::{ChecklistRow, checklist};
use crate::algorithm::marking;
use crate::algorithm::status::{dose_status, status_for_key};
use crate::algorithm::summary::CompletionSummary;
use crate::config::EvaluatorConfig;
use crate::error::{ActionRefused, RefusalReason};
use crate::models::dose::Dose;
use crate::models::record::ImmunizationRecord;
use crate::models::status::ImmunizationStatus;
use crate::schedule::ScheduleTable;
use crate::utils::logging::{log_refused, log_unknown_dose};

/// Status evaluator over a schedule table
#[derive(Debug, Clone, Default)]
pub struct ImmunizationEvaluator {
    table: ScheduleTable,
    config: EvaluatorConfig,
}

impl ImmunizationEvaluator {
    /// Create an evaluator
    #[must_use]
    pub fn new(table: ScheduleTable, config: EvaluatorConfig) -> Self {
        Self { table, config }
    }

    /// Schedule table in use
    #[must_use]
    pub fn table(&self) -> &ScheduleTable {
        &self.table
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Age in whole months used for eligibility
    ///
    /// Clamped to 0 when `today` precedes the birth date.
    #[must_use]
    pub fn age_in_months(&self, birth_date: NaiveDate, today: NaiveDate) -> u32 {
        age_in_months_with(birth_date, today, self.config.month_counting)
    }

    /// Human-readable age
    #[must_use]
    pub fn age_as_string(&self, birth_date: NaiveDate, today: NaiveDate) -> String {
        age_as_string(birth_date, today)
    }

    /// Status of a dose
    #[must_use]
    pub fn status(&self, dose: Dose, record: &ImmunizationRecord, today: NaiveDate) -> ImmunizationStatus {
        dose_status(dose, record, &self.table, &self.config, today)
    }

    /// Status of a raw dose key; unknown keys yield `UnknownSchedule` unless given
    #[must_use]
    pub fn status_for_key(
        &self,
        key: &str,
        record: &ImmunizationRecord,
        today: NaiveDate,
    ) -> ImmunizationStatus {
        let status = status_for_key(key, record, &self.table, &self.config, today);
        if status == ImmunizationStatus::UnknownSchedule {
            log_unknown_dose(key, &record.child_id);
        }
        status
    }

    /// Whether the mark/unmark control for a dose is enabled
    #[must_use]
    pub fn is_actionable(&self, dose: Dose, record: &ImmunizationRecord, today: NaiveDate) -> bool {
        self.status(dose, record, today).is_actionable()
    }

    /// Completion summary over all scheduled doses
    #[must_use]
    pub fn summary(&self, record: &ImmunizationRecord, today: NaiveDate) -> CompletionSummary {
        CompletionSummary::from_statuses(Dose::ALL.iter().map(|&dose| self.status(dose, record, today)))
    }

    /// Checklist rows for every dose
    #[must_use]
    pub fn checklist(&self, record: &ImmunizationRecord, today: NaiveDate) -> Vec<ChecklistRow> {
        checklist(record, &self.table, &self.config, today)
    }

    /// Mark a dose as given, on `action_date` or else on `today`
    ///
    /// Eligibility is judged at `today`, matching [`Self::is_actionable`]. A
    /// backdated `action_date` records when the dose was really given; one
    /// after `today` is refused.
    pub fn mark_given(
        &self,
        dose: Dose,
        record: &ImmunizationRecord,
        action_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<ImmunizationRecord, ActionRefused> {
        let action_date = action_date.unwrap_or(today);
        marking::mark_given(dose, record, &self.table, &self.config, action_date, today)
            .inspect_err(|refused| log_refused(refused, &record.child_id))
    }

    /// Clear a dose entry
    #[must_use]
    pub fn unmark(&self, dose: Dose, record: &ImmunizationRecord) -> ImmunizationRecord {
        marking::unmark(dose, record)
    }

    /// Apply a checkbox change: checked marks the dose on `today`, unchecked clears it
    ///
    /// Unchecking is refused like checking when the dose is not actionable.
    pub fn toggle(
        &self,
        dose: Dose,
        record: &ImmunizationRecord,
        checked: bool,
        today: NaiveDate,
    ) -> Result<ImmunizationRecord, ActionRefused> {
        if checked {
            return self.mark_given(dose, record, None, today);
        }
        let status = self.status(dose, record, today);
        if !status.is_actionable() {
            let refused = ActionRefused {
                dose,
                status,
                age_months: self.age_in_months(record.birth_date, today),
                reason: RefusalReason::NotActionable,
            };
            log_refused(&refused, &record.child_id);
            return Err(refused);
        }
        Ok(self.unmark(dose, record))
    }
}
