//! Configuration for the immunization evaluator.

use std::fmt;

/// Months after the end of a dose's target window during which the dose is
/// still due rather than overdue
pub const DEFAULT_GRACE_MONTHS: u32 = 1;

/// How elapsed months are counted for eligibility comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthCounting {
    /// Difference of calendar months, ignoring the day of month
    #[default]
    CalendarMonths,
    /// Only months fully elapsed, counting the day of month
    CompletedMonths,
}

/// Configuration for date format handling
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// Formats tried, in order, when parsing stored date strings
    pub date_formats: Vec<String>,
    /// Format used when writing dates back out
    pub default_format: String,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO, what date inputs produce: 2024-01-15
                "%d-%m-%Y".to_string(), // 15-01-2024
                "%d/%m/%Y".to_string(), // 15/01/2024
                "%Y/%m/%d".to_string(), // 2024/01/15
                "%d.%m.%Y".to_string(), // 15.01.2024
            ],
            default_format: "%Y-%m-%d".to_string(),
            enable_format_detection: true,
        }
    }
}

/// Configuration for the `ImmunizationEvaluator`
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Grace window in months after the target age
    pub grace_months: u32,
    /// Month counting rule for ages
    pub month_counting: MonthCounting,
    /// Date format configuration for stored strings
    pub date_format_config: DateFormatConfig,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            grace_months: DEFAULT_GRACE_MONTHS,
            month_counting: MonthCounting::default(),
            date_format_config: DateFormatConfig::default(),
        }
    }
}

impl EvaluatorConfig {
    /// Override the grace window
    #[must_use]
    pub fn with_grace_months(mut self, grace_months: u32) -> Self {
        self.grace_months = grace_months;
        self
    }

    /// Override the month counting rule
    #[must_use]
    pub fn with_month_counting(mut self, month_counting: MonthCounting) -> Self {
        self.month_counting = month_counting;
        self
    }
}

impl fmt::Display for EvaluatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluator Configuration:")?;
        writeln!(f, "  Grace Window: {} month(s)", self.grace_months)?;
        writeln!(f, "  Month Counting: {:?}", self.month_counting)?;
        writeln!(
            f,
            "  Date Formats: {}",
            self.date_format_config.date_formats.join(", ")
        )?;
        Ok(())
    }
}
