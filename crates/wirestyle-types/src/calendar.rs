//! Calendar dates and clock times.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::{Component, Result, StyleError};

/// A calendar date as supplied by the caller.
///
/// Fields are public and unchecked; formatters call [`CalendarDate::validate`]
/// before rendering. Calendar legality (February 30th and the like) is the
/// caller's concern and is not re-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Proleptic Gregorian year.
    pub year: i32,
    /// Month, 1-12.
    pub month: u8,
    /// Day of the month, 1-31.
    pub day: u8,
}

impl CalendarDate {
    /// Creates a new date without validating it.
    #[must_use]
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the current date in UTC.
    ///
    /// Wire copy is dated in GMT, so "today" is the UTC calendar day.
    #[must_use]
    pub fn today() -> Self {
        Self::of(&Utc::now())
    }

    /// Builds a date from any chrono date-like value.
    #[must_use]
    pub fn of(value: &impl Datelike) -> Self {
        Self {
            year: value.year(),
            // chrono guarantees 1..=12 and 1..=31
            month: value.month() as u8,
            day: value.day() as u8,
        }
    }

    /// Checks that month and day are in range.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidInput`] if the month is outside 1-12 or
    /// the day outside 1-31.
    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            return Err(StyleError::out_of_range(
                Component::Month,
                self.month.into(),
                1,
                12,
            ));
        }
        if !(1..=31).contains(&self.day) {
            return Err(StyleError::out_of_range(
                Component::Day,
                self.day.into(),
                1,
                31,
            ));
        }
        Ok(())
    }

    /// Returns true if both dates fall in the same year.
    #[must_use]
    pub const fn same_year(&self, other: &Self) -> bool {
        self.year == other.year
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        Self::of(&value)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
}

impl ClockTime {
    /// Midnight (00:00).
    pub const MIDNIGHT: Self = Self::new(0, 0);

    /// Noon (12:00).
    pub const NOON: Self = Self::new(12, 0);

    /// Creates a new time without validating it.
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Builds a time from any chrono time-like value, dropping seconds.
    #[must_use]
    pub fn of(value: &impl Timelike) -> Self {
        Self {
            hour: value.hour() as u8,
            minute: value.minute() as u8,
        }
    }

    /// Checks that hour and minute are in range.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidInput`] if the hour is outside 0-23 or
    /// the minute outside 0-59.
    pub fn validate(&self) -> Result<()> {
        if self.hour > 23 {
            return Err(StyleError::out_of_range(
                Component::Hour,
                self.hour.into(),
                0,
                23,
            ));
        }
        if self.minute > 59 {
            return Err(StyleError::out_of_range(
                Component::Minute,
                self.minute.into(),
                0,
                59,
            ));
        }
        Ok(())
    }

    /// Returns true before noon.
    #[must_use]
    pub const fn is_am(&self) -> bool {
        self.hour < 12
    }

    /// Returns the hour on a 12-hour dial (1-12).
    #[must_use]
    pub const fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(value: NaiveTime) -> Self {
        Self::of(&value)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_validate() {
        assert!(CalendarDate::new(2024, 1, 31).validate().is_ok());
        assert!(CalendarDate::new(2024, 12, 31).validate().is_ok());

        let err = CalendarDate::new(2024, 13, 1).validate().unwrap_err();
        assert!(matches!(
            err,
            StyleError::InvalidInput {
                field: Component::Month,
                value: 13,
                ..
            }
        ));

        let err = CalendarDate::new(2024, 0, 1).validate().unwrap_err();
        assert!(matches!(err, StyleError::InvalidInput { field: Component::Month, .. }));

        let err = CalendarDate::new(2024, 2, 32).validate().unwrap_err();
        assert!(matches!(err, StyleError::InvalidInput { field: Component::Day, .. }));
    }

    #[test]
    fn test_date_from_chrono() {
        let naive = NaiveDate::from_ymd_opt(2001, 9, 11).unwrap();
        let date = CalendarDate::from(naive);
        assert_eq!(date, CalendarDate::new(2001, 9, 11));
        assert_eq!(date.to_string(), "2001-09-11");
    }

    #[test]
    fn test_time_validate() {
        assert!(ClockTime::new(23, 59).validate().is_ok());
        assert!(ClockTime::MIDNIGHT.validate().is_ok());

        let err = ClockTime::new(24, 0).validate().unwrap_err();
        assert!(matches!(err, StyleError::InvalidInput { field: Component::Hour, .. }));

        let err = ClockTime::new(10, 60).validate().unwrap_err();
        assert!(matches!(err, StyleError::InvalidInput { field: Component::Minute, .. }));
    }

    #[test]
    fn test_hour12() {
        assert_eq!(ClockTime::new(0, 30).hour12(), 12);
        assert_eq!(ClockTime::new(12, 30).hour12(), 12);
        assert_eq!(ClockTime::new(16, 5).hour12(), 4);
        assert_eq!(ClockTime::new(4, 0).hour12(), 4);
        assert!(ClockTime::new(11, 59).is_am());
        assert!(!ClockTime::NOON.is_am());
    }

    #[test]
    fn test_time_from_chrono() {
        let naive = NaiveTime::from_hms_opt(16, 5, 42).unwrap();
        assert_eq!(ClockTime::from(naive), ClockTime::new(16, 5));
    }
}
