//! Error handling for the immunization engine.
//!
//! Evaluation itself is total: unknown doses and inverted dates degrade into
//! statuses and markers. Errors only arise at the boundary, when stored text
//! is turned into typed records, and when a mark is refused.

use std::fmt;

use chrono::NaiveDate;

use crate::models::dose::Dose;
use crate::models::status::ImmunizationStatus;

/// Errors raised while reading or writing stored immunization data
#[derive(Debug, thiserror::Error)]
pub enum ImmunizationError {
    /// A date string could not be parsed with any configured format
    #[error("Date parsing error: '{0}' is not a recognized date")]
    InvalidDate(String),

    /// The record has no usable birth date
    #[error("Missing birth date for immunization entry '{0}'")]
    MissingBirthDate(String),

    /// A dose key outside the fixed schedule was requested by name
    #[error("Unknown dose identifier: {0}")]
    UnknownDose(String),

    /// The stored record does not have the expected shape
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// JSON (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A mark/unmark action was refused
    #[error(transparent)]
    Refused(#[from] ActionRefused),
}

impl ImmunizationError {
    /// Create a malformed record error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedRecord(msg.into())
    }
}

/// Result type for immunization operations
pub type Result<T> = std::result::Result<T, ImmunizationError>;

/// Why a mark action was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefusalReason {
    /// The dose is not actionable at the evaluation date
    NotActionable,
    /// The administration date lies after the evaluation date
    FutureDate(NaiveDate),
}

/// A refused mark action
///
/// Returned instead of a mutated record when the dose is not actionable, so
/// the caller can disable the control and explain why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRefused {
    /// Dose the action targeted
    pub dose: Dose,
    /// Status of the dose at evaluation time
    pub status: ImmunizationStatus,
    /// Age of the child in months at evaluation time
    pub age_months: u32,
    /// Cause of the refusal
    pub reason: RefusalReason,
}

impl fmt::Display for ActionRefused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            RefusalReason::NotActionable => write!(
                f,
                "Cannot mark {} at {} months: status is {}",
                self.dose.key(),
                self.age_months,
                self.status.label()
            ),
            RefusalReason::FutureDate(date) => write!(
                f,
                "Cannot mark {} on {date}: the date has not happened yet",
                self.dose.key()
            ),
        }
    }
}

impl std::error::Error for ActionRefused {}
