//! Inclusive date ranges for time off and reporting periods.

use chrono::Datelike;
use chrono::NaiveDate;
use chrono::Weekday;
use serde::Deserialize;
use serde::Serialize;

use super::Week;
use crate::error::PeriodError;

/// An inclusive range of dates, `start..=end`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timesheet_lib::period::DateRange;
///
/// // Friday to the following Tuesday
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(range.days(), 5);
/// assert_eq!(range.business_days(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = PeriodError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Creates a range, failing if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        if end < start {
            return Err(PeriodError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a single-day range.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the first date.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last date.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the number of calendar days, counting both ends.
    pub fn days(&self) -> u64 {
        self.end.signed_duration_since(self.start).num_days().unsigned_abs() + 1
    }

    /// Iterates over every date in the range.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Returns the number of weekdays (Monday to Friday) in the range.
    pub fn business_days(&self) -> u64 {
        self.iter()
            .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
            .count() as u64
    }

    /// Returns `true` if `date` is within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns `true` if the ranges share at least one date.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns every week the range touches, in order.
    pub fn weeks(&self) -> Vec<Week> {
        let last = Week::containing(self.end);
        let mut week = Week::containing(self.start);
        let mut weeks = vec![week];
        while week < last {
            week = week.next();
            weeks.push(week);
        }
        weeks
    }
}

impl From<Week> for DateRange {
    fn from(week: Week) -> Self {
        Self {
            start: week.start(),
            end: week.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = DateRange::new(date(2026, 10, 20), date(2026, 10, 19)).unwrap_err();
        assert!(matches!(err, PeriodError::Inverted { .. }));
    }

    #[test]
    fn test_deserialize_checks_order() {
        let range: DateRange =
            serde_json::from_str(r#"{"start": "2026-10-19", "end": "2026-10-23"}"#).unwrap();
        assert_eq!(range.business_days(), 5);

        let inverted =
            serde_json::from_str::<DateRange>(r#"{"start": "2026-10-23", "end": "2026-10-19"}"#);
        assert!(inverted.is_err());
    }

    #[test]
    fn test_single_day() {
        let range = DateRange::single(date(2026, 10, 24)); // Saturday
        assert_eq!(range.days(), 1);
        assert_eq!(range.business_days(), 0);
        assert_eq!(range.iter().count(), 1);
    }

    #[test]
    fn test_week_range_has_five_business_days() {
        let range = DateRange::from(Week::containing(date(2026, 10, 21)));
        assert_eq!(range.days(), 7);
        assert_eq!(range.business_days(), 5);
    }

    #[test]
    fn test_overlaps() {
        let a = DateRange::new(date(2026, 10, 1), date(2026, 10, 10)).unwrap();
        let b = DateRange::new(date(2026, 10, 10), date(2026, 10, 12)).unwrap();
        let c = DateRange::new(date(2026, 10, 11), date(2026, 10, 12)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_weeks_touched() {
        let range = DateRange::new(date(2026, 10, 16), date(2026, 10, 27)).unwrap();
        let starts: Vec<NaiveDate> = range.weeks().iter().map(|w| w.start()).collect();
        assert_eq!(starts, vec![date(2026, 10, 12), date(2026, 10, 19), date(2026, 10, 26)]);
    }
}
