//! Calendar date rendering.

use wirestyle_types::{CalendarDate, Component, Result, StyleError};

/// Month names as written in datelines. Short months are spelled out,
/// the rest take the house abbreviation.
const MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "March", "April", "May", "June", "July", "Aug.", "Sept.", "Oct.", "Nov.",
    "Dec.",
];

/// Returns the style abbreviation for a month number (1-12).
///
/// # Errors
///
/// Returns [`StyleError::InvalidInput`] if `month` is outside 1-12.
pub fn month_abbreviation(month: u8) -> Result<&'static str> {
    match month {
        1..=12 => Ok(MONTHS[usize::from(month - 1)]),
        _ => Err(StyleError::out_of_range(Component::Month, month.into(), 1, 12)),
    }
}

/// Formats a date relative to the current UTC date.
///
/// See [`date_relative_to`].
///
/// # Errors
///
/// Returns [`StyleError::InvalidInput`] if month or day are out of range.
pub fn date(date: CalendarDate) -> Result<String> {
    date_relative_to(date, CalendarDate::today())
}

/// Formats a date as `Month Day`, adding `, Year` only when the year
/// differs from `today`'s.
///
/// ```
/// use wirestyle_dates::date_relative_to;
/// use wirestyle_types::CalendarDate;
///
/// let today = CalendarDate::new(2021, 10, 1);
/// assert_eq!(date_relative_to(CalendarDate::new(2021, 9, 1), today).unwrap(), "Sept. 1");
/// assert_eq!(date_relative_to(CalendarDate::new(2001, 9, 11), today).unwrap(), "Sept. 11, 2001");
/// ```
///
/// # Errors
///
/// Returns [`StyleError::InvalidInput`] if month or day are out of range.
pub fn date_relative_to(date: CalendarDate, today: CalendarDate) -> Result<String> {
    let month_day = month_day(date)?;
    if date.same_year(&today) {
        Ok(month_day)
    } else {
        Ok(format!("{month_day}, {}", date.year))
    }
}

/// Formats a date with the year always present, e.g. `March 1, 2021`.
///
/// # Errors
///
/// Returns [`StyleError::InvalidInput`] if month or day are out of range.
pub fn date_with_year(date: CalendarDate) -> Result<String> {
    Ok(format!("{}, {}", month_day(date)?, date.year))
}

fn month_day(date: CalendarDate) -> Result<String> {
    date.validate()?;
    let month = month_abbreviation(date.month)?;
    Ok(format!("{month} {}", date.day))
}
