//! Tests for reading and writing the stored immunization record shape

use crate::utils::iso;
use posyandu_immunization::{
    DateFormatConfig, Dose, ImmunizationError, ImmunizationRecord, Sex,
};
use serde_json::json;

fn stored_entry() -> serde_json::Value {
    json!({
        "balitaId": "-NbalitaA",
        "namaBalita": "Putri Lestari",
        "jenisKelamin": "Perempuan",
        "tanggalLahir": "2024-01-01",
        "hepatitisB": {"tanggal": "2024-01-01", "usia": "0 Hari"},
        "bcg": {"tanggal": "2024-02-05", "usia": "1 Bulan 4 Hari"},
        "polio1": {"tanggal": "2024-02-05", "usia": "1 Bulan 4 Hari"},
        "dptHbHib1": {"tanggal": "", "usia": ""},
        "polio2": {"tanggal": "", "usia": ""},
        "dptHbHib2": {"tanggal": "", "usia": ""},
        "polio3": {"tanggal": "", "usia": ""},
        "dptHbHib3": {"tanggal": "", "usia": ""},
        "polio4": {"tanggal": "", "usia": ""},
        "ipv": {"tanggal": "", "usia": ""},
        "mr": {"tanggal": "", "usia": ""},
        "dptHbHibLanjutan": {"tanggal": "", "usia": ""},
        "mrLanjutan": {"tanggal": "", "usia": ""}
    })
}

#[test]
fn test_read_stored_entry() {
    let config = DateFormatConfig::default();
    let record = ImmunizationRecord::from_json(&stored_entry().to_string(), &config).unwrap();

    assert_eq!(record.child_id, "-NbalitaA");
    assert_eq!(record.child_name, "Putri Lestari");
    assert_eq!(record.sex, Sex::Female);
    assert_eq!(record.birth_date, iso("2024-01-01"));
    assert_eq!(record.given_count(), 3);
    assert_eq!(
        record.entry(Dose::Bcg).unwrap().age_at_administration,
        "1 Bulan 4 Hari"
    );
    assert!(record.entry(Dose::DptHbHib1).is_none());
}

#[test]
fn test_write_reproduces_stored_entry() {
    let config = DateFormatConfig::default();
    let original = stored_entry();
    let record = ImmunizationRecord::from_json(&original.to_string(), &config).unwrap();

    assert_eq!(record.to_json_value(&config).unwrap(), original);
}

#[test]
fn test_missing_dose_keys_mean_not_given() {
    let config = DateFormatConfig::default();
    let value = json!({
        "balitaId": "-NbalitaB",
        "namaBalita": "Rudi",
        "jenisKelamin": "Laki-laki",
        "tanggalLahir": "2023-11-30"
    });
    let record = ImmunizationRecord::from_json(&value.to_string(), &config).unwrap();

    assert_eq!(record.given_count(), 0);
    let written = record.to_json_value(&config).unwrap();
    assert_eq!(written["mrLanjutan"], json!({"tanggal": "", "usia": ""}));
}

#[test]
fn test_local_date_formats_are_accepted() {
    let config = DateFormatConfig::default();
    let value = json!({
        "balitaId": "-NbalitaC",
        "tanggalLahir": "01/02/2024",
        "bcg": {"tanggal": "05-03-2024", "usia": "1 Bulan 4 Hari"}
    });
    let record = ImmunizationRecord::from_json(&value.to_string(), &config).unwrap();

    assert_eq!(record.birth_date, iso("2024-02-01"));
    assert_eq!(record.entry(Dose::Bcg).unwrap().administered_date, iso("2024-03-05"));
}

#[test]
fn test_boundary_errors() {
    let config = DateFormatConfig::default();

    let bad_date = json!({"balitaId": "x", "tanggalLahir": "bukan tanggal"});
    assert!(matches!(
        ImmunizationRecord::from_json(&bad_date.to_string(), &config),
        Err(ImmunizationError::InvalidDate(_))
    ));

    let bad_entry = json!({"balitaId": "x", "tanggalLahir": "2024-01-01", "bcg": {"tanggal": 5}});
    assert!(matches!(
        ImmunizationRecord::from_json(&bad_entry.to_string(), &config),
        Err(ImmunizationError::MalformedRecord(_))
    ));

    assert!(matches!(
        ImmunizationRecord::from_json("{not json", &config),
        Err(ImmunizationError::Serialization(_))
    ));
}
