//! Benchmark inputs for wirestyle.

use chrono::{Datelike, NaiveDate};
use wirestyle_lib::{CalendarDate, ClockTime};

/// Slugs of every grammar, valid and invalid, in rough wire proportions.
pub const SLUGS: &[&str] = &[
    "breaking-news-1",
    "markets-close",
    "Breaking_News",
    "--bad--",
    "FERRARI-IPO/",
    "USA-ELECTION-2024/",
    "FERRARI-FERRARI/",
    "FERRARI-IPO-FOO-BAR-BAZ-QUX/",
    "PROSPECTUS",
    "Earnings_Q3",
];

/// Returns every day of `year` as a [`CalendarDate`].
#[must_use]
pub fn dates_in_year(year: i32) -> Vec<CalendarDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .into_iter()
        .flat_map(|first| first.iter_days())
        .take_while(|day| day.year() == year)
        .map(CalendarDate::from)
        .collect()
}

/// Returns every minute of the day.
#[must_use]
pub fn minutes_of_day() -> Vec<ClockTime> {
    (0..24u8)
        .flat_map(|hour| (0..60u8).map(move |minute| ClockTime::new(hour, minute)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs() {
        assert_eq!(dates_in_year(2024).len(), 366);
        assert_eq!(dates_in_year(2023).len(), 365);
        assert_eq!(minutes_of_day().len(), 1440);
    }
}
