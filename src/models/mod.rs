//! Domain models for immunization records
//!
//! This module contains the dose identifiers, record types and status
//! classifications shared by the schedule, the algorithms and storage.

pub mod dose;
pub mod record;
pub mod status;
pub mod types;

// Re-export commonly used types
pub use dose::{DOSE_COUNT, Dose};
pub use record::{DoseEntry, ImmunizationRecord, StoredDoseEntry, StoredImmunizationRecord};
pub use status::{CompletionLabel, ImmunizationStatus};
pub use types::Sex;
