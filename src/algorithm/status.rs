//! Per-dose status derivation

use chrono::NaiveDate;

use super::age::age_in_months_with;
use crate::config::EvaluatorConfig;
use crate::models::dose::Dose;
use crate::models::record::ImmunizationRecord;
use crate::models::status::ImmunizationStatus;
use crate::schedule::{ScheduleTable, TargetAge};

/// Classify a dose without a recorded entry by the child's age
///
/// Due from `start_months` through `end_months + grace_months` inclusive.
#[must_use]
pub fn classify_by_age(age_months: u32, target: TargetAge, grace_months: u32) -> ImmunizationStatus {
    if age_months < target.start_months {
        ImmunizationStatus::NotYetDue
    } else if age_months <= target.end_months.saturating_add(grace_months) {
        ImmunizationStatus::Due
    } else {
        ImmunizationStatus::Overdue
    }
}

/// Status of a dose given whether it was recorded and the schedule entry
///
/// A recorded dose is `Given` whatever the age, even when the administered
/// date is implausible; that is not validated here.
#[must_use]
pub fn resolve_status(
    given: bool,
    target: Option<TargetAge>,
    age_months: u32,
    grace_months: u32,
) -> ImmunizationStatus {
    if given {
        return ImmunizationStatus::Given;
    }
    match target {
        Some(target) => classify_by_age(age_months, target, grace_months),
        None => ImmunizationStatus::UnknownSchedule,
    }
}

/// Status of a dose for a record at `today`
#[must_use]
pub fn dose_status(
    dose: Dose,
    record: &ImmunizationRecord,
    table: &ScheduleTable,
    config: &EvaluatorConfig,
    today: NaiveDate,
) -> ImmunizationStatus {
    let age_months = age_in_months_with(record.birth_date, today, config.month_counting);
    resolve_status(
        record.is_given(dose),
        table.lookup(dose).map(|entry| entry.target),
        age_months,
        config.grace_months,
    )
}

/// Status for a raw dose key, which may be outside the schedule
#[must_use]
pub fn status_for_key(
    key: &str,
    record: &ImmunizationRecord,
    table: &ScheduleTable,
    config: &EvaluatorConfig,
    today: NaiveDate,
) -> ImmunizationStatus {
    let age_months = age_in_months_with(record.birth_date, today, config.month_counting);
    resolve_status(
        record.is_given_key(key),
        table.lookup_key(key).map(|entry| entry.target),
        age_months,
        config.grace_months,
    )
}
