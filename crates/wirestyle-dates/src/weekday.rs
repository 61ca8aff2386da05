//! Day-of-week rendering.

use wirestyle_types::{CalendarDate, Result, Weekday};

/// Returns the ISO weekday of a date in the proleptic Gregorian calendar.
///
/// # Errors
///
/// Returns [`wirestyle_types::StyleError::InvalidInput`] if month or day
/// are out of range.
pub fn weekday(date: CalendarDate) -> Result<Weekday> {
    date.validate()?;
    let days = days_from_civil(date.year, date.month, date.day);
    // 1970-01-01 was a Thursday (ISO 4).
    let iso = (days + 3).rem_euclid(7) + 1;
    Ok(Weekday::from_iso(iso as u8).unwrap_or(Weekday::Monday))
}

/// Returns the weekday name relative to the current UTC date.
///
/// See [`dayofweek_relative_to`].
///
/// # Errors
///
/// Returns [`wirestyle_types::StyleError::InvalidInput`] if month or day
/// are out of range.
pub fn dayofweek(date: CalendarDate) -> Result<Option<&'static str>> {
    dayofweek_relative_to(date, CalendarDate::today())
}

/// Returns the weekday name for `date`, or `None` when `date` is `today`.
///
/// Stories about today don't repeat the day of the week.
///
/// ```
/// use wirestyle_dates::dayofweek_relative_to;
/// use wirestyle_types::CalendarDate;
///
/// let today = CalendarDate::new(2023, 10, 25);
/// assert_eq!(dayofweek_relative_to(CalendarDate::new(2023, 10, 24), today).unwrap(), Some("Tuesday"));
/// assert_eq!(dayofweek_relative_to(today, today).unwrap(), None);
/// ```
///
/// # Errors
///
/// Returns [`wirestyle_types::StyleError::InvalidInput`] if month or day
/// are out of range.
pub fn dayofweek_relative_to(
    date: CalendarDate,
    today: CalendarDate,
) -> Result<Option<&'static str>> {
    let day = weekday(date)?;
    Ok((date != today).then(|| day.name()))
}

/// Returns the three-letter weekday label used in tables, e.g. `Tue`.
///
/// # Errors
///
/// Returns [`wirestyle_types::StyleError::InvalidInput`] if month or day
/// are out of range.
pub fn dayofweek_tabular(date: CalendarDate) -> Result<&'static str> {
    Ok(weekday(date)?.tabular())
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    let day = i64::from(day);
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn test_known_week() {
        let expected = [
            (18, "Wednesday", "Wed"),
            (19, "Thursday", "Thu"),
            (20, "Friday", "Fri"),
            (21, "Saturday", "Sat"),
            (22, "Sunday", "Sun"),
            (23, "Monday", "Mon"),
            (24, "Tuesday", "Tue"),
        ];
        let today = CalendarDate::new(2030, 1, 1);
        for (day, name, tabular) in expected {
            let date = CalendarDate::new(2023, 10, day);
            assert_eq!(dayofweek_relative_to(date, today).unwrap(), Some(name));
            assert_eq!(dayofweek_tabular(date).unwrap(), tabular);
        }
    }

    #[test]
    fn test_today_is_omitted() {
        let today = CalendarDate::new(2023, 10, 24);
        assert_eq!(dayofweek_relative_to(today, today).unwrap(), None);
        assert_eq!(dayofweek(CalendarDate::today()).unwrap(), None);
        // The table label is never omitted.
        assert_eq!(dayofweek_tabular(today).unwrap(), "Tue");
    }

    #[test]
    fn test_epoch_anchor() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(weekday(CalendarDate::new(1970, 1, 1)).unwrap(), Weekday::Thursday);
    }

    #[test]
    fn test_matches_chrono() {
        let start = NaiveDate::from_ymd_opt(1582, 10, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2400, 3, 1).unwrap();
        let mut current = start;
        while current <= end {
            let ours = weekday(CalendarDate::from(current)).unwrap();
            assert_eq!(ours, Weekday::from(current.weekday()), "mismatch on {current}");
            current += chrono::TimeDelta::days(37);
        }
    }

    #[test]
    fn test_leap_days() {
        assert_eq!(weekday(CalendarDate::new(2000, 2, 29)).unwrap(), Weekday::Tuesday);
        assert_eq!(weekday(CalendarDate::new(2024, 2, 29)).unwrap(), Weekday::Thursday);
        assert_eq!(weekday(CalendarDate::new(1900, 3, 1)).unwrap(), Weekday::Thursday);
    }

    #[test]
    fn test_out_of_range() {
        assert!(weekday(CalendarDate::new(2023, 0, 1)).is_err());
        assert!(dayofweek_tabular(CalendarDate::new(2023, 1, 32)).is_err());
    }
}
