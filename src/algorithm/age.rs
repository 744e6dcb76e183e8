//! Age arithmetic between calendar dates
//!
//! Two views of elapsed time are provided: a whole-month count used for
//! eligibility comparisons, and a years/months/days breakdown rendered as the
//! age strings shown next to administered doses ("3 Bulan 2 Hari").
//!
//! Both are total over their inputs. When `as_of` precedes `birth_date` the
//! month count is clamped to 0 and the string form is
//! [`INVALID_DATE_MARKER`]; neither case is an error.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::config::MonthCounting;

/// Age string returned when the reference date precedes the birth date
pub const INVALID_DATE_MARKER: &str = "Tanggal tidak valid";

/// Elapsed calendar time split into years, months and days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBreakdown {
    /// Whole years
    pub years: u32,
    /// Whole months beyond `years` (0-11)
    pub months: u32,
    /// Days beyond `months`
    pub days: u32,
}

impl AgeBreakdown {
    /// Total whole months
    #[must_use]
    pub const fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

impl fmt::Display for AgeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.years > 0 {
            write!(f, "{} Tahun {} Bulan", self.years, self.months)
        } else if self.months > 0 {
            write!(f, "{} Bulan {} Hari", self.months, self.days)
        } else {
            write!(f, "{} Hari", self.days)
        }
    }
}

/// Number of days in the month before the one containing `date`
fn days_in_previous_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

/// Break the time from `birth_date` to `as_of` into years, months and days
///
/// Calendar differences are taken per unit. A negative day difference borrows
/// one month worth the length of the month preceding `as_of`; a negative month
/// difference then borrows one year. A birth day past the end of the borrowed
/// month is clamped to its last day, so Jan 31 to Mar 1 is one month and one
/// day.
///
/// Returns `None` when `as_of` precedes `birth_date`.
#[must_use]
pub fn age_breakdown(birth_date: NaiveDate, as_of: NaiveDate) -> Option<AgeBreakdown> {
    if as_of < birth_date {
        return None;
    }

    let mut years = as_of.year() - birth_date.year();
    let mut months = as_of.month() as i32 - birth_date.month() as i32;
    let mut days = as_of.day() as i32 - birth_date.day() as i32;

    if days < 0 {
        months -= 1;
        let borrowed = days_in_previous_month(as_of);
        let birth_day = birth_date.day().min(borrowed);
        days = (as_of.day() + borrowed - birth_day) as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Some(AgeBreakdown {
        years: years.max(0) as u32,
        months: months.max(0) as u32,
        days: days.max(0) as u32,
    })
}

/// Whole months from `birth_date` to `as_of`, counted the calendar way
///
/// The day of month is ignored: a child born on the 31st is one month old on
/// the 1st of the next month.
///
/// Clamped: returns 0 when `as_of` precedes `birth_date`.
#[must_use]
pub fn age_in_months(birth_date: NaiveDate, as_of: NaiveDate) -> u32 {
    let months = (as_of.year() - birth_date.year()) * 12 + as_of.month() as i32
        - birth_date.month() as i32;
    months.max(0) as u32
}

/// Whole months under the given counting rule
///
/// Clamped: returns 0 when `as_of` precedes `birth_date`.
#[must_use]
pub fn age_in_months_with(birth_date: NaiveDate, as_of: NaiveDate, counting: MonthCounting) -> u32 {
    match counting {
        MonthCounting::CalendarMonths => age_in_months(birth_date, as_of),
        MonthCounting::CompletedMonths => {
            age_breakdown(birth_date, as_of).map_or(0, |age| age.total_months())
        }
    }
}

/// Human-readable age from `birth_date` to `as_of`
///
/// Returns [`INVALID_DATE_MARKER`] when `as_of` precedes `birth_date`.
#[must_use]
pub fn age_as_string(birth_date: NaiveDate, as_of: NaiveDate) -> String {
    age_breakdown(birth_date, as_of)
        .map_or_else(|| INVALID_DATE_MARKER.to_string(), |age| age.to_string())
}
