//! Immunization record model
//!
//! One `ImmunizationRecord` exists per child. It references the child by id
//! only and holds a `DoseEntry` for every dose whose administration has been
//! recorded. A missing entry means "not yet given".
//!
//! The stored shape (`StoredImmunizationRecord`) mirrors the `imunisasi`
//! collection: identity fields plus one `{tanggal, usia}` object per dose key,
//! where an empty `tanggal` means "not given". A non-empty `tanggal` that no
//! configured format recognizes still means "given"; such entries are kept
//! verbatim and written back unchanged.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::dose::Dose;
use super::types::Sex;
use crate::config::DateFormatConfig;
use crate::error::{ImmunizationError, Result};
use crate::utils::date_utils::{format_date, parse_date_string, parse_required_date};

/// The record of an administered dose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseEntry {
    /// Date the dose was administered
    pub administered_date: NaiveDate,
    /// Age at administration as stored, e.g. "3 Bulan 2 Hari"
    ///
    /// Advisory only: the canonical value is recomputed from the birth date.
    pub age_at_administration: String,
}

impl DoseEntry {
    /// Create a new dose entry
    #[must_use]
    pub fn new(administered_date: NaiveDate, age_at_administration: impl Into<String>) -> Self {
        Self {
            administered_date,
            age_at_administration: age_at_administration.into(),
        }
    }

    /// Cell text for tabular exports: `"2024-01-01 (0 Hari)"`
    #[must_use]
    pub fn export_cell(&self) -> String {
        if self.age_at_administration.is_empty() {
            self.administered_date.to_string()
        } else {
            format!("{} ({})", self.administered_date, self.age_at_administration)
        }
    }
}

/// Immunization record for one child
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImmunizationRecord {
    /// Identifier of the child (`balitaId`)
    pub child_id: String,
    /// Name of the child (`namaBalita`)
    pub child_name: String,
    /// Sex of the child (`jenisKelamin`)
    pub sex: Sex,
    /// Birth date of the child (`tanggalLahir`)
    pub birth_date: NaiveDate,
    doses: BTreeMap<Dose, DoseEntry>,
    /// Entries stored under keys outside the schedule, kept for round trips
    other_entries: BTreeMap<String, DoseEntry>,
    /// Entries whose stored date could not be parsed, keyed by dose key
    unparsed_entries: BTreeMap<String, StoredDoseEntry>,
}

impl ImmunizationRecord {
    /// Create an empty record for a child
    #[must_use]
    pub fn new(
        child_id: impl Into<String>,
        child_name: impl Into<String>,
        sex: Sex,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            child_id: child_id.into(),
            child_name: child_name.into(),
            sex,
            birth_date,
            doses: BTreeMap::new(),
            other_entries: BTreeMap::new(),
            unparsed_entries: BTreeMap::new(),
        }
    }

    /// Attach an existing entry, e.g. when building from storage
    #[must_use]
    pub fn with_entry(mut self, dose: Dose, entry: DoseEntry) -> Self {
        self.insert_entry(dose, entry);
        self
    }

    /// Entry for a dose, if administration has been recorded
    #[must_use]
    pub fn entry(&self, dose: Dose) -> Option<&DoseEntry> {
        self.doses.get(&dose)
    }

    /// Entry for a raw dose key, including keys outside the schedule
    #[must_use]
    pub fn entry_for_key(&self, key: &str) -> Option<&DoseEntry> {
        match key.parse::<Dose>() {
            Ok(dose) => self.entry(dose),
            Err(_) => self.other_entries.get(key),
        }
    }

    /// Whether a dose has been given, including entries with an unparsed date
    #[must_use]
    pub fn is_given(&self, dose: Dose) -> bool {
        self.doses.contains_key(&dose) || self.unparsed_entries.contains_key(dose.key())
    }

    /// Whether a raw dose key has a recorded entry
    #[must_use]
    pub fn is_given_key(&self, key: &str) -> bool {
        self.entry_for_key(key).is_some() || self.unparsed_entries.contains_key(key)
    }

    /// Number of scheduled doses given
    #[must_use]
    pub fn given_count(&self) -> usize {
        Dose::ALL.iter().filter(|&&dose| self.is_given(dose)).count()
    }

    /// Recorded entries in canonical dose order
    pub fn entries(&self) -> impl Iterator<Item = (Dose, &DoseEntry)> {
        self.doses.iter().map(|(dose, entry)| (*dose, entry))
    }

    /// Entries stored under keys outside the schedule
    #[must_use]
    pub fn other_entries(&self) -> &BTreeMap<String, DoseEntry> {
        &self.other_entries
    }

    /// Stored entry of a dose whose date could not be parsed
    #[must_use]
    pub fn unparsed_entry(&self, dose: Dose) -> Option<&StoredDoseEntry> {
        self.unparsed_entries.get(dose.key())
    }

    /// Stored entries with unparsed dates, keyed by dose key
    #[must_use]
    pub fn unparsed_entries(&self) -> &BTreeMap<String, StoredDoseEntry> {
        &self.unparsed_entries
    }

    pub(crate) fn insert_entry(&mut self, dose: Dose, entry: DoseEntry) {
        self.unparsed_entries.remove(dose.key());
        self.doses.insert(dose, entry);
    }

    pub(crate) fn remove_entry(&mut self, dose: Dose) -> Option<DoseEntry> {
        self.unparsed_entries.remove(dose.key());
        self.doses.remove(&dose)
    }

    /// Build a typed record from its stored shape
    pub fn from_stored(stored: &StoredImmunizationRecord, config: &DateFormatConfig) -> Result<Self> {
        if stored.tanggal_lahir.trim().is_empty() {
            return Err(ImmunizationError::MissingBirthDate(stored.balita_id.clone()));
        }
        let birth_date = parse_required_date(&stored.tanggal_lahir, config)?;

        let mut record = Self::new(
            stored.balita_id.clone(),
            stored.nama_balita.clone(),
            Sex::from(stored.jenis_kelamin.as_str()),
            birth_date,
        );

        for (key, value) in &stored.extra {
            if !value.is_object() {
                log::debug!("Ignoring non-dose field '{key}' in immunization entry");
                continue;
            }
            let raw: StoredDoseEntry = serde_json::from_value(value.clone()).map_err(|e| {
                ImmunizationError::malformed(format!("dose '{key}': {e}"))
            })?;
            if raw.tanggal.trim().is_empty() {
                continue;
            }
            let Some(date) = parse_date_string(&raw.tanggal, config) else {
                log::warn!(
                    "Keeping unrecognized date '{}' of dose '{key}' for child {} as given",
                    raw.tanggal,
                    stored.balita_id
                );
                record.unparsed_entries.insert(key.clone(), raw);
                continue;
            };
            let entry = DoseEntry::new(date, raw.usia.trim());
            match key.parse::<Dose>() {
                Ok(dose) => record.insert_entry(dose, entry),
                Err(_) => {
                    log::warn!("Immunization entry has dose key '{key}' outside the schedule");
                    record.other_entries.insert(key.clone(), entry);
                }
            }
        }

        Ok(record)
    }

    /// Convert to the stored shape, writing every scheduled dose key
    #[must_use]
    pub fn to_stored(&self, config: &DateFormatConfig) -> StoredImmunizationRecord {
        let mut extra = BTreeMap::new();
        for dose in Dose::ALL {
            let raw = match self.entry(dose) {
                Some(entry) => StoredDoseEntry::from_entry(entry, config),
                None => self.unparsed_entry(dose).cloned().unwrap_or_default(),
            };
            extra.insert(dose.key().to_string(), raw.into_value());
        }
        for (key, entry) in &self.other_entries {
            extra.insert(key.clone(), StoredDoseEntry::from_entry(entry, config).into_value());
        }
        for (key, raw) in &self.unparsed_entries {
            extra
                .entry(key.clone())
                .or_insert_with(|| raw.clone().into_value());
        }

        StoredImmunizationRecord {
            balita_id: self.child_id.clone(),
            nama_balita: self.child_name.clone(),
            jenis_kelamin: self.sex.as_str().to_string(),
            tanggal_lahir: format_date(self.birth_date, config),
            extra,
        }
    }

    /// Parse a record from stored JSON text
    pub fn from_json(json: &str, config: &DateFormatConfig) -> Result<Self> {
        let stored: StoredImmunizationRecord = serde_json::from_str(json)?;
        Self::from_stored(&stored, config)
    }

    /// Serialize the record to its stored JSON value
    pub fn to_json_value(&self, config: &DateFormatConfig) -> Result<Value> {
        Ok(serde_json::to_value(self.to_stored(config))?)
    }
}

/// Stored `{tanggal, usia}` pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDoseEntry {
    /// Administered date, empty when not given
    #[serde(default)]
    pub tanggal: String,
    /// Age at administration, empty when not given
    #[serde(default)]
    pub usia: String,
}

impl StoredDoseEntry {
    fn from_entry(entry: &DoseEntry, config: &DateFormatConfig) -> Self {
        Self {
            tanggal: format_date(entry.administered_date, config),
            usia: entry.age_at_administration.clone(),
        }
    }

    /// Cell text for tabular exports, with the date as stored
    #[must_use]
    pub fn export_cell(&self) -> String {
        let usia = self.usia.trim();
        if usia.is_empty() {
            self.tanggal.clone()
        } else {
            format!("{} ({usia})", self.tanggal)
        }
    }

    fn into_value(self) -> Value {
        serde_json::json!({ "tanggal": self.tanggal, "usia": self.usia })
    }
}

/// Immunization entry as kept in the `imunisasi` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredImmunizationRecord {
    /// Child identifier
    #[serde(rename = "balitaId", default)]
    pub balita_id: String,
    /// Child name
    #[serde(rename = "namaBalita", default)]
    pub nama_balita: String,
    /// Child sex
    #[serde(rename = "jenisKelamin", default)]
    pub jenis_kelamin: String,
    /// Child birth date
    #[serde(rename = "tanggalLahir", default)]
    pub tanggal_lahir: String,
    /// Dose entries keyed by dose key, plus any other fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
