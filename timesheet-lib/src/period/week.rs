//! Monday-based timesheet week.

use std::fmt;

use chrono::Datelike;
use chrono::Days;
use chrono::Local;
use chrono::NaiveDate;
use chrono::Weekday;
use serde::Deserialize;
use serde::Serialize;

use crate::error::PeriodError;

/// A timesheet week, Monday through Sunday.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timesheet_lib::period::Week;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(); // Thursday
/// let week = Week::containing(date);
///
/// assert_eq!(week.start(), NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
/// assert_eq!(week.end(), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
/// assert_eq!(week.label(), "Oct 12 - Oct 18, 2026");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWeek")]
pub struct Week {
    start: NaiveDate,
}

#[derive(Deserialize)]
struct RawWeek {
    start: NaiveDate,
}

impl TryFrom<RawWeek> for Week {
    type Error = PeriodError;

    fn try_from(raw: RawWeek) -> Result<Self, Self::Error> {
        if raw.start.weekday() != Weekday::Mon {
            return Err(PeriodError::NotMonday(raw.start));
        }
        Ok(Self { start: raw.start })
    }
}

impl Week {
    /// Returns the week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let back = u64::from(date.weekday().num_days_from_monday());
        Self {
            start: date.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN),
        }
    }

    /// Returns the week containing today's local date.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// Returns the Monday starting the week.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the Sunday ending the week.
    pub fn end(&self) -> NaiveDate {
        self.offset(6)
    }

    /// Returns the seven dates of the week, Monday first.
    pub fn days(&self) -> [NaiveDate; 7] {
        std::array::from_fn(|i| self.offset(i as u64))
    }

    /// Returns the following week.
    pub fn next(&self) -> Self {
        Self {
            start: self.offset(7),
        }
    }

    /// Returns the preceding week.
    pub fn previous(&self) -> Self {
        Self {
            start: self
                .start
                .checked_sub_days(Days::new(7))
                .unwrap_or(NaiveDate::MIN),
        }
    }

    /// Returns `true` if `date` falls in this week.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end()
    }

    /// Returns the ISO year and week number.
    pub fn iso_week(&self) -> (i32, u32) {
        let iso = self.start.iso_week();
        (iso.year(), iso.week())
    }

    /// Returns a human-readable label such as `Oct 12 - Oct 18, 2026`.
    ///
    /// Weeks spanning a new year show the year on both ends.
    pub fn label(&self) -> String {
        let end = self.end();
        if self.start.year() == end.year() {
            format!("{} - {}", self.start.format("%b %-d"), end.format("%b %-d, %Y"))
        } else {
            format!(
                "{} - {}",
                self.start.format("%b %-d, %Y"),
                end.format("%b %-d, %Y")
            )
        }
    }

    fn offset(&self, days: u64) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deserialize_requires_monday() {
        let week: Week = serde_json::from_str(r#"{"start": "2026-10-19"}"#).unwrap();
        assert_eq!(week, Week::containing(date(2026, 10, 21)));

        let tuesday = serde_json::from_str::<Week>(r#"{"start": "2026-10-20"}"#);
        assert!(tuesday.is_err());
    }

    #[test]
    fn test_monday_and_sunday_belong_to_same_week() {
        let monday = Week::containing(date(2026, 10, 19));
        let sunday = Week::containing(date(2026, 10, 25));
        assert_eq!(monday, sunday);
        assert_eq!(monday.start(), date(2026, 10, 19));
    }

    #[test]
    fn test_days() {
        let week = Week::containing(date(2026, 10, 21));
        let days = week.days();
        assert_eq!(days[0], date(2026, 10, 19));
        assert_eq!(days[6], date(2026, 10, 25));
        assert!(days.iter().all(|d| week.contains(*d)));
        assert!(!week.contains(date(2026, 10, 26)));
    }

    #[test]
    fn test_navigation() {
        let week = Week::containing(date(2026, 1, 1));
        assert_eq!(week.start(), date(2025, 12, 29));
        assert_eq!(week.next().start(), date(2026, 1, 5));
        assert_eq!(week.next().previous(), week);
    }

    #[test]
    fn test_label_across_years() {
        let week = Week::containing(date(2026, 1, 1));
        assert_eq!(week.label(), "Dec 29, 2025 - Jan 4, 2026");
        assert_eq!(week.iso_week(), (2026, 1));
    }
}
