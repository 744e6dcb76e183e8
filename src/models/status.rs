//! Status classifications for doses and whole records

use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived classification of a dose for one child at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImmunizationStatus {
    /// An administration has been recorded
    Given,
    /// Within the target window plus grace
    Due,
    /// Younger than the target age
    NotYetDue,
    /// Past the target window plus grace
    Overdue,
    /// No schedule entry exists for the dose
    UnknownSchedule,
}

impl ImmunizationStatus {
    /// Badge text shown on the dashboard
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Given => "DIBERIKAN",
            Self::Due => "WAKTUNYA",
            Self::NotYetDue => "BELUM WAKTUNYA",
            Self::Overdue => "TERLAMBAT",
            Self::UnknownSchedule => "JADWAL TIDAK DIKETAHUI",
        }
    }

    /// Whether the mark/unmark control is enabled for this status
    ///
    /// `Given` stays actionable so the entry can be unmarked.
    #[must_use]
    pub const fn is_actionable(self) -> bool {
        matches!(self, Self::Given | Self::Due | Self::Overdue)
    }
}

impl fmt::Display for ImmunizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Completion label for a whole record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompletionLabel {
    /// No dose given
    #[serde(rename = "Belum Ada")]
    None,
    /// Some doses given
    #[serde(rename = "Sebagian")]
    Partial,
    /// Every dose given
    #[serde(rename = "Lengkap")]
    Complete,
}

impl CompletionLabel {
    /// Classify a completed count against the schedule size
    #[must_use]
    pub const fn from_counts(completed: usize, total: usize) -> Self {
        if completed == 0 {
            Self::None
        } else if completed >= total {
            Self::Complete
        } else {
            Self::Partial
        }
    }

    /// Display text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Belum Ada",
            Self::Partial => "Sebagian",
            Self::Complete => "Lengkap",
        }
    }
}

impl fmt::Display for CompletionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
