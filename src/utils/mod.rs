//! Utility functions for date handling and logging

pub mod date_utils;
pub mod logging;

pub use date_utils::{format_date, parse_date_string};
