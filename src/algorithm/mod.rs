//! Immunization algorithms
//!
//! Pure functions over dates, schedule entries and records: age arithmetic,
//! status derivation, completion summaries, checklist rows and the
//! mark/unmark mutations.

pub mod age;
pub mod checklist;
pub mod marking;
pub mod status;
pub mod summary;

pub use age::{AgeBreakdown, INVALID_DATE_MARKER, age_as_string, age_breakdown, age_in_months};
pub use checklist::{ChecklistRow, checklist};
pub use marking::{dose_entry_for, mark_given, unmark};
pub use status::{classify_by_age, dose_status, resolve_status, status_for_key};
pub use summary::CompletionSummary;
