//! Period error types

use chrono::NaiveDate;

/// Errors that can occur when building date ranges and weeks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// The range ends before it starts.
    #[error("Invalid range: {end} is before {start}")]
    Inverted { start: NaiveDate, end: NaiveDate },

    /// A week must start on a Monday.
    #[error("Invalid week start: {0} is not a Monday")]
    NotMonday(NaiveDate),
}
