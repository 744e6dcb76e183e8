//! Logging utilities
//!
//! Standardized messages for the few events worth logging in an otherwise
//! pure engine.

use crate::error::ActionRefused;

/// Log a refused mark action
pub fn log_refused(refused: &ActionRefused, child_id: &str) {
    log::debug!("Refused mark for child {child_id}: {refused}");
}

/// Log a dose key that has no schedule entry
pub fn log_unknown_dose(key: &str, child_id: &str) {
    log::warn!("No schedule entry for dose '{key}' (child {child_id})");
}

/// Log completion of a bulk operation over records
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `items` - Number of records processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, items: usize, elapsed: Option<std::time::Duration>) {
    if let Some(duration) = elapsed {
        log::info!("Successfully {operation} {items} records in {duration:?}");
    } else {
        log::info!("Successfully {operation} {items} records");
    }
}
