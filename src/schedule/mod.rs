//! Immunization schedule table
//!
//! Maps each dose to its ideal administration age in months. The default table
//! follows the IDAI recommendation used by the posyandu dashboard. Lookups for
//! doses or keys without an entry return `None`, which the evaluator turns
//! into `ImmunizationStatus::UnknownSchedule`.

use std::fmt;

use crate::models::dose::{DOSE_COUNT, Dose};

/// Ideal administration age as an inclusive range of months
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetAge {
    /// First month the dose is due
    pub start_months: u32,
    /// Last month of the target window, before any grace
    pub end_months: u32,
}

impl TargetAge {
    /// Single-month target
    #[must_use]
    pub const fn at(months: u32) -> Self {
        Self {
            start_months: months,
            end_months: months,
        }
    }

    /// Target range
    #[must_use]
    pub const fn between(start_months: u32, end_months: u32) -> Self {
        Self {
            start_months,
            end_months,
        }
    }
}

impl fmt::Display for TargetAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_months == self.end_months {
            write!(f, "{} Bulan", self.start_months)
        } else {
            write!(f, "{}-{} Bulan", self.start_months, self.end_months)
        }
    }
}

/// Schedule entry for one dose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Dose this entry applies to
    pub dose: Dose,
    /// Ideal administration age
    pub target: TargetAge,
    /// Label shown in the schedule column
    pub label: &'static str,
}

impl ScheduleEntry {
    const fn new(dose: Dose, target: TargetAge, label: &'static str) -> Self {
        Self {
            dose,
            target,
            label,
        }
    }
}

/// The IDAI schedule as used by the dashboard
///
/// Hepatitis B is recorded as 0-0.5 months on the dashboard; with ages in
/// whole months that window behaves exactly like a point target at 0.
pub const IDAI_SCHEDULE: [ScheduleEntry; DOSE_COUNT] = [
    ScheduleEntry::new(Dose::HepatitisB, TargetAge::at(0), "Saat Lahir (<24 jam)"),
    ScheduleEntry::new(Dose::Bcg, TargetAge::at(1), "1 Bulan"),
    ScheduleEntry::new(Dose::Polio1, TargetAge::at(1), "1 Bulan"),
    ScheduleEntry::new(Dose::DptHbHib1, TargetAge::at(2), "2 Bulan"),
    ScheduleEntry::new(Dose::Polio2, TargetAge::at(2), "2 Bulan"),
    ScheduleEntry::new(Dose::DptHbHib2, TargetAge::at(3), "3 Bulan"),
    ScheduleEntry::new(Dose::Polio3, TargetAge::at(3), "3 Bulan"),
    ScheduleEntry::new(Dose::DptHbHib3, TargetAge::at(4), "4 Bulan"),
    ScheduleEntry::new(Dose::Polio4, TargetAge::at(4), "4 Bulan"),
    ScheduleEntry::new(Dose::Ipv, TargetAge::at(9), "9 Bulan"),
    ScheduleEntry::new(Dose::Mr, TargetAge::at(9), "9 Bulan"),
    ScheduleEntry::new(Dose::DptHbHibLanjutan, TargetAge::at(18), "18 Bulan"),
    ScheduleEntry::new(Dose::MrLanjutan, TargetAge::at(18), "18 Bulan"),
];

/// Lookup table from dose to schedule entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTable {
    entries: [Option<ScheduleEntry>; DOSE_COUNT],
}

impl Default for ScheduleTable {
    fn default() -> Self {
        Self::from_entries(IDAI_SCHEDULE)
    }
}

impl ScheduleTable {
    /// Table with no entries; every dose is unscheduled
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: [None; DOSE_COUNT],
        }
    }

    /// Build a table from entries; later entries for the same dose win
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = ScheduleEntry>) -> Self {
        let mut table = Self::empty();
        for entry in entries {
            table.entries[entry.dose.index()] = Some(entry);
        }
        table
    }

    /// Replace the target age of one dose
    #[must_use]
    pub fn with_target(mut self, dose: Dose, target: TargetAge, label: &'static str) -> Self {
        self.entries[dose.index()] = Some(ScheduleEntry::new(dose, target, label));
        self
    }

    /// Remove a dose from the table
    #[must_use]
    pub fn without(mut self, dose: Dose) -> Self {
        self.entries[dose.index()] = None;
        self
    }

    /// Schedule entry for a dose
    #[must_use]
    pub fn lookup(&self, dose: Dose) -> Option<&ScheduleEntry> {
        self.entries[dose.index()].as_ref()
    }

    /// Schedule entry for a raw dose key
    #[must_use]
    pub fn lookup_key(&self, key: &str) -> Option<&ScheduleEntry> {
        key.parse::<Dose>().ok().and_then(|dose| self.lookup(dose))
    }

    /// Number of doses with a schedule entry
    #[must_use]
    pub fn scheduled_count(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    /// Entries in canonical dose order
    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().flatten()
    }
}
