//! Common domain type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sex of a child as stored in the `jenisKelamin` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    /// Laki-laki
    Male,
    /// Perempuan
    Female,
    /// Not specified or unrecognized
    #[default]
    Unknown,
}

impl Sex {
    /// Stored text for this value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Laki-laki",
            Self::Female => "Perempuan",
            Self::Unknown => "",
        }
    }
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "laki-laki" | "laki laki" | "l" | "m" | "male" => Self::Male,
            "perempuan" | "p" | "f" | "female" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for Sex {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.as_str().to_string()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "-"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
