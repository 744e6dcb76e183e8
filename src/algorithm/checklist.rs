//! Per-dose checklist rows for a record
//!
//! One row per dose in canonical order, carrying everything the checklist
//! table shows: schedule label, status, whether the checkbox is enabled, and
//! the administration details. The age at administration is recomputed from
//! the birth date; the stored value is reported alongside as advisory.

use chrono::NaiveDate;
use serde::Serialize;

use super::age::{age_as_string, age_in_months_with};
use super::status::resolve_status;
use crate::config::EvaluatorConfig;
use crate::models::dose::Dose;
use crate::models::record::ImmunizationRecord;
use crate::models::status::ImmunizationStatus;
use crate::schedule::ScheduleTable;

/// A single checklist row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistRow {
    /// Dose of this row
    pub dose: Dose,
    /// Schedule column text, `None` when unscheduled
    pub schedule_label: Option<&'static str>,
    /// Status at the evaluation date
    pub status: ImmunizationStatus,
    /// Whether the mark/unmark control is enabled
    pub actionable: bool,
    /// Date administered, if given
    pub administered_date: Option<NaiveDate>,
    /// Stored date text of a given dose whose date could not be parsed
    pub unparsed_date: Option<String>,
    /// Age at administration recomputed from the birth date
    pub age_at_administration: Option<String>,
    /// Age at administration as stored with the entry
    pub stored_age: Option<String>,
}

impl ChecklistRow {
    /// Whether the stored age disagrees with the recomputed one
    #[must_use]
    pub fn stored_age_diverges(&self) -> bool {
        match (&self.stored_age, &self.age_at_administration) {
            (Some(stored), Some(computed)) => stored != computed,
            _ => false,
        }
    }
}

/// Build checklist rows for every dose in canonical order
#[must_use]
pub fn checklist(
    record: &ImmunizationRecord,
    table: &ScheduleTable,
    config: &EvaluatorConfig,
    today: NaiveDate,
) -> Vec<ChecklistRow> {
    let age_months = age_in_months_with(record.birth_date, today, config.month_counting);

    Dose::ALL
        .iter()
        .map(|&dose| {
            let schedule = table.lookup(dose);
            let entry = record.entry(dose);
            let unparsed = record.unparsed_entry(dose);
            let status = resolve_status(
                record.is_given(dose),
                schedule.map(|s| s.target),
                age_months,
                config.grace_months,
            );

            ChecklistRow {
                dose,
                schedule_label: schedule.map(|s| s.label),
                status,
                actionable: status.is_actionable(),
                administered_date: entry.map(|e| e.administered_date),
                unparsed_date: unparsed.map(|raw| raw.tanggal.clone()),
                age_at_administration: entry
                    .map(|e| age_as_string(record.birth_date, e.administered_date)),
                stored_age: entry
                    .map(|e| e.age_at_administration.clone())
                    .or_else(|| unparsed.map(|raw| raw.usia.trim().to_string()))
                    .filter(|age| !age.is_empty()),
            }
        })
        .collect()
}
