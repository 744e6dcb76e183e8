//! A Rust library for evaluating child immunization schedules: ages, per-dose
//! status, completion summaries and the mark/unmark mutations behind a
//! posyandu immunization checklist.

pub mod algorithm;
pub mod collections;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod export;
pub mod models;
pub mod schedule;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{DEFAULT_GRACE_MONTHS, DateFormatConfig, EvaluatorConfig, MonthCounting};
pub use error::{ActionRefused, ImmunizationError, RefusalReason, Result};
pub use evaluator::ImmunizationEvaluator;

// Models
pub use models::{
    CompletionLabel, DOSE_COUNT, Dose, DoseEntry, ImmunizationRecord, ImmunizationStatus, Sex,
};
pub use schedule::{IDAI_SCHEDULE, ScheduleEntry, ScheduleTable, TargetAge};

// Algorithms
pub use algorithm::{
    AgeBreakdown, ChecklistRow, CompletionSummary, INVALID_DATE_MARKER, age_as_string,
    age_in_months,
};

// Collections and export
pub use collections::{ImmunizationCollection, ModelCollection};
pub use export::{EXPORT_HEADERS, ExportRow, export_rows};
