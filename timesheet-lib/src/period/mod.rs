//! Timesheet periods: Monday-based weeks and inclusive date ranges.

mod range;
mod week;

pub use range::DateRange;
pub use week::Week;
