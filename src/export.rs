//! Tabular export rows
//!
//! Produces the rows of the immunization recap table: running number, child
//! identity, then one cell per dose in canonical order. Page layout and
//! document rendering are left to the caller.

use std::sync::{Arc, LazyLock};

use crate::models::dose::Dose;
use crate::models::record::ImmunizationRecord;

/// Cell text for a missing value
pub const EMPTY_CELL: &str = "-";

/// Column headers of the recap table
pub static EXPORT_HEADERS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    ["No", "Nama Balita", "Jns Kel", "Tgl Lahir"]
        .into_iter()
        .chain(Dose::ALL.iter().map(|dose| dose.short_label()))
        .collect()
});

/// One row of the recap table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    /// Cells in header order
    pub cells: Vec<String>,
}

/// Build a row for a record at 1-based position `number`
#[must_use]
pub fn export_row(number: usize, record: &ImmunizationRecord) -> ExportRow {
    let mut cells = Vec::with_capacity(EXPORT_HEADERS.len());
    cells.push(number.to_string());
    cells.push(non_empty(&record.child_name));
    cells.push(record.sex.to_string());
    cells.push(record.birth_date.to_string());
    cells.extend(Dose::ALL.iter().map(|&dose| {
        match (record.entry(dose), record.unparsed_entry(dose)) {
            (Some(entry), _) => entry.export_cell(),
            (None, Some(raw)) => raw.export_cell(),
            (None, None) => EMPTY_CELL.to_string(),
        }
    }));
    ExportRow { cells }
}

/// Build rows for records in the given order, numbered from 1
#[must_use]
pub fn export_rows(records: &[Arc<ImmunizationRecord>]) -> Vec<ExportRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| export_row(i + 1, record))
        .collect()
}

fn non_empty(value: &str) -> String {
    if value.trim().is_empty() {
        EMPTY_CELL.to_string()
    } else {
        value.to_string()
    }
}
