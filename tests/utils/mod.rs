use chrono::NaiveDate;
use posyandu_immunization::{Dose, DoseEntry, ImmunizationRecord, Sex, age_as_string};

/// Build a date, panicking on invalid input
#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Parse an ISO date string
#[must_use]
pub fn iso(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Empty record for a child born on `birth`
#[must_use]
pub fn record_born(birth: NaiveDate) -> ImmunizationRecord {
    ImmunizationRecord::new("-Ntest", "Anak Uji", Sex::Female, birth)
}

/// Record with the first `count` doses (canonical order) given
#[must_use]
pub fn record_with_given(birth: NaiveDate, count: usize) -> ImmunizationRecord {
    Dose::ALL
        .iter()
        .take(count)
        .fold(record_born(birth), |record, &dose| {
            let given_on = birth + chrono::Duration::days(30 * dose.index() as i64);
            record.with_entry(dose, DoseEntry::new(given_on, age_as_string(birth, given_on)))
        })
}
