//! Days of the week.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// ISO day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Weekday {
    /// Returns the weekday for an ISO number (Monday = 1 ... Sunday = 7).
    #[must_use]
    pub const fn from_iso(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Returns the ISO number, Monday = 1 ... Sunday = 7.
    #[must_use]
    pub const fn number_from_monday(&self) -> u8 {
        *self as u8 + 1
    }

    /// Returns the capitalized name used in running copy.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Returns the three-letter label used in tables.
    #[must_use]
    pub const fn tabular(&self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    /// Returns all weekdays, Monday first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl FromStr for Weekday {
    type Err = WeekdayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|day| {
                day.name().eq_ignore_ascii_case(name) || day.tabular().eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| WeekdayParseError(s.to_string()))
    }
}

/// Error returned when parsing an unknown weekday name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayParseError(String);

impl std::fmt::Display for WeekdayParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid weekday '{}', expected a name like Monday or Mon", self.0)
    }
}

impl std::error::Error for WeekdayParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_numbers() {
        assert_eq!(Weekday::Monday.number_from_monday(), 1);
        assert_eq!(Weekday::Sunday.number_from_monday(), 7);
        for day in Weekday::all() {
            assert_eq!(Weekday::from_iso(day.number_from_monday()), Some(*day));
        }
        assert_eq!(Weekday::from_iso(0), None);
        assert_eq!(Weekday::from_iso(8), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Weekday::Tuesday.name(), "Tuesday");
        assert_eq!(Weekday::Tuesday.tabular(), "Tue");
        assert_eq!(Weekday::Sunday.to_string(), "Sunday");
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("THU".parse::<Weekday>().unwrap(), Weekday::Thursday);
        assert!("someday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Wed), Weekday::Wednesday);
    }
}
