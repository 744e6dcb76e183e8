//! Mark-given and unmark mutations
//!
//! Records are never mutated in place; every operation returns a new record.

use chrono::NaiveDate;

use super::age::{age_as_string, age_in_months_with};
use super::status::resolve_status;
use crate::config::EvaluatorConfig;
use crate::error::{ActionRefused, RefusalReason};
use crate::models::dose::Dose;
use crate::models::record::{DoseEntry, ImmunizationRecord};
use crate::schedule::ScheduleTable;

/// Entry for a dose administered on `action_date`
#[must_use]
pub fn dose_entry_for(birth_date: NaiveDate, action_date: NaiveDate) -> DoseEntry {
    DoseEntry::new(action_date, age_as_string(birth_date, action_date))
}

/// Record a dose as given on `action_date`, evaluated at `today`
///
/// The dose must be actionable at `today`: due, overdue, or already given
/// (in which case the entry is replaced). `action_date` may be backdated to
/// the real administration day but never lies after `today`. Otherwise the
/// action is refused and the record is left untouched.
pub fn mark_given(
    dose: Dose,
    record: &ImmunizationRecord,
    table: &ScheduleTable,
    config: &EvaluatorConfig,
    action_date: NaiveDate,
    today: NaiveDate,
) -> Result<ImmunizationRecord, ActionRefused> {
    let age_months = age_in_months_with(record.birth_date, today, config.month_counting);
    let status = resolve_status(
        record.is_given(dose),
        table.lookup(dose).map(|entry| entry.target),
        age_months,
        config.grace_months,
    );

    let reason = if !status.is_actionable() {
        Some(RefusalReason::NotActionable)
    } else if action_date > today {
        Some(RefusalReason::FutureDate(action_date))
    } else {
        None
    };
    if let Some(reason) = reason {
        return Err(ActionRefused {
            dose,
            status,
            age_months,
            reason,
        });
    }

    let mut updated = record.clone();
    updated.insert_entry(dose, dose_entry_for(record.birth_date, action_date));
    Ok(updated)
}

/// Clear a dose entry; both date and age are removed together
#[must_use]
pub fn unmark(dose: Dose, record: &ImmunizationRecord) -> ImmunizationRecord {
    let mut updated = record.clone();
    updated.remove_entry(dose);
    updated
}
