//! Dose identifiers
//!
//! The set of doses is fixed at compile time. Every dose carries its storage
//! key, its full display label, and the short header used in tabular exports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ImmunizationError;

/// Number of doses in the schedule
pub const DOSE_COUNT: usize = 13;

/// A single named vaccination event in the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dose {
    /// Hepatitis B birth dose
    #[serde(rename = "hepatitisB")]
    HepatitisB,
    /// BCG
    #[serde(rename = "bcg")]
    Bcg,
    /// Oral polio 1
    #[serde(rename = "polio1")]
    Polio1,
    /// DPT-HB-Hib 1
    #[serde(rename = "dptHbHib1")]
    DptHbHib1,
    /// Oral polio 2
    #[serde(rename = "polio2")]
    Polio2,
    /// DPT-HB-Hib 2
    #[serde(rename = "dptHbHib2")]
    DptHbHib2,
    /// Oral polio 3
    #[serde(rename = "polio3")]
    Polio3,
    /// DPT-HB-Hib 3
    #[serde(rename = "dptHbHib3")]
    DptHbHib3,
    /// Oral polio 4
    #[serde(rename = "polio4")]
    Polio4,
    /// Inactivated polio (injection)
    #[serde(rename = "ipv")]
    Ipv,
    /// Measles-rubella
    #[serde(rename = "mr")]
    Mr,
    /// DPT-HB-Hib booster
    #[serde(rename = "dptHbHibLanjutan")]
    DptHbHibLanjutan,
    /// Measles-rubella booster
    #[serde(rename = "mrLanjutan")]
    MrLanjutan,
}

impl Dose {
    /// All doses in canonical order
    pub const ALL: [Self; DOSE_COUNT] = [
        Self::HepatitisB,
        Self::Bcg,
        Self::Polio1,
        Self::DptHbHib1,
        Self::Polio2,
        Self::DptHbHib2,
        Self::Polio3,
        Self::DptHbHib3,
        Self::Polio4,
        Self::Ipv,
        Self::Mr,
        Self::DptHbHibLanjutan,
        Self::MrLanjutan,
    ];

    /// Key used in stored records
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::HepatitisB => "hepatitisB",
            Self::Bcg => "bcg",
            Self::Polio1 => "polio1",
            Self::DptHbHib1 => "dptHbHib1",
            Self::Polio2 => "polio2",
            Self::DptHbHib2 => "dptHbHib2",
            Self::Polio3 => "polio3",
            Self::DptHbHib3 => "dptHbHib3",
            Self::Polio4 => "polio4",
            Self::Ipv => "ipv",
            Self::Mr => "mr",
            Self::DptHbHibLanjutan => "dptHbHibLanjutan",
            Self::MrLanjutan => "mrLanjutan",
        }
    }

    /// Full human-readable name
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::HepatitisB => "Hepatitis B",
            Self::Bcg => "BCG",
            Self::Polio1 => "Polio Tetes 1 (OPV-1)",
            Self::DptHbHib1 => "DPT HB Hib 1 (Pentabio-1)",
            Self::Polio2 => "Polio Tetes 2 (OPV-2)",
            Self::DptHbHib2 => "DPT HB Hib 2 (Pentabio-2)",
            Self::Polio3 => "Polio Tetes 3 (OPV-3)",
            Self::DptHbHib3 => "DPT HB Hib 3 (Pentabio-3)",
            Self::Polio4 => "Polio Tetes 4 (OPV-4)",
            Self::Ipv => "Polio Suntik (IPV)",
            Self::Mr => "Campak Rubela (MR)",
            Self::DptHbHibLanjutan => "DPT HB Hib Lanjutan",
            Self::MrLanjutan => "Campak Rubela Lanjutan (MR)",
        }
    }

    /// Compact column header for tabular exports
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::HepatitisB => "Hepatitis B",
            Self::Bcg => "BCG",
            Self::Polio1 => "Polio 1",
            Self::DptHbHib1 => "DPT-HB-Hib 1",
            Self::Polio2 => "Polio 2",
            Self::DptHbHib2 => "DPT-HB-Hib 2",
            Self::Polio3 => "Polio 3",
            Self::DptHbHib3 => "DPT-HB-Hib 3",
            Self::Polio4 => "Polio 4",
            Self::Ipv => "IPV",
            Self::Mr => "MR",
            Self::DptHbHibLanjutan => "DPT-HB-Hib Lnjtn",
            Self::MrLanjutan => "MR Lanjutan",
        }
    }

    /// Position in canonical order
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Dose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

impl FromStr for Dose {
    type Err = ImmunizationError;

    /// Parse a stored dose key, e.g. `"dptHbHib1"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|dose| dose.key() == s.trim())
            .ok_or_else(|| ImmunizationError::UnknownDose(s.to_string()))
    }
}
