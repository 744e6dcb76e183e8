//! Module for handling date parsing and formatting.

use chrono::NaiveDate;

use crate::config::DateFormatConfig;
use crate::error::{ImmunizationError, Result};

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();

    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Parse a required date, reporting the offending text on failure
pub fn parse_required_date(s: &str, config: &DateFormatConfig) -> Result<NaiveDate> {
    parse_date_string(s, config).ok_or_else(|| ImmunizationError::InvalidDate(s.to_string()))
}

/// Parse an optional date where an empty string means "not set"
pub fn parse_optional_date(s: &str, config: &DateFormatConfig) -> Result<Option<NaiveDate>> {
    if s.trim().is_empty() {
        return Ok(None);
    }
    parse_required_date(s, config).map(Some)
}

/// Format a date with the configured output format
#[must_use]
pub fn format_date(date: NaiveDate, config: &DateFormatConfig) -> String {
    date.format(&config.default_format).to_string()
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    // Timestamps such as "2024-01-15T08:30:00.000Z"; only the date part matters
    if s.len() > 10 && s.as_bytes().get(10) == Some(&b'T') {
        return Some("%Y-%m-%dT%H:%M:%S%.fZ");
    }

    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        // Day-first is the local convention, even when the first part could be a month
        if parts.len() == 3 && parts[2].len() == 4 && parts[0].parse::<u8>().is_ok() {
            return Some("%d/%m/%Y");
        }
    }

    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        return Some("%Y%m%d");
    }

    None
}
