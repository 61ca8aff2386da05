//! Clock time rendering.

use chrono::{DateTime, Offset, TimeZone, Timelike};
use wirestyle_types::{ClockTime, Result};

/// How [`time_in_zone`] reports the time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeZoneDisplay {
    /// Append the zone abbreviation: `12:30 p.m. SAST`.
    #[default]
    Abbreviation,
    /// Append the GMT equivalent for non-GMT times: `12:30 p.m. (1030 GMT)`.
    GmtEquivalent,
}

/// Formats a time of day.
///
/// Uses a 12-hour clock with `a.m.`/`p.m.`, drops `:00`, and writes
/// `midnight` and `noon` for 00:00 and 12:00.
///
/// ```
/// use wirestyle_dates::time;
/// use wirestyle_types::ClockTime;
///
/// assert_eq!(time(ClockTime::new(16, 5)).unwrap(), "4:05 p.m.");
/// assert_eq!(time(ClockTime::new(12, 0)).unwrap(), "noon");
/// ```
///
/// # Errors
///
/// Returns [`wirestyle_types::StyleError::InvalidInput`] if hour or minute
/// are out of range.
pub fn time(time: ClockTime) -> Result<String> {
    time.validate()?;
    Ok(render(time))
}

/// Formats a zone-less time that is known to be GMT, e.g. `noon GMT`.
///
/// # Errors
///
/// Returns [`wirestyle_types::StyleError::InvalidInput`] if hour or minute
/// are out of range.
pub fn time_gmt(time: ClockTime) -> Result<String> {
    time.validate()?;
    Ok(format!("{} GMT", render(time)))
}

/// Formats a zoned timestamp's local time and labels its zone.
///
/// UTC is called GMT. Zones that only format as a numeric offset are
/// written as `GMT+hh:mm`.
pub fn time_in_zone<Tz>(dt: &DateTime<Tz>, display: TimeZoneDisplay) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let local = render(ClockTime::of(dt));
    match display {
        TimeZoneDisplay::Abbreviation => format!("{local} {}", zone_label(dt)),
        TimeZoneDisplay::GmtEquivalent => {
            if dt.offset().fix().local_minus_utc() == 0 {
                local
            } else {
                let gmt = dt.naive_utc();
                format!("{local} ({:02}{:02} GMT)", gmt.hour(), gmt.minute())
            }
        }
    }
}

fn zone_label<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let label = dt.format("%Z").to_string();
    match label.as_str() {
        "UTC" | "Z" | "+00:00" => "GMT".to_string(),
        _ if label.starts_with(['+', '-']) => format!("GMT{label}"),
        _ => label,
    }
}

fn render(time: ClockTime) -> String {
    match (time.hour, time.minute) {
        (0, 0) => "midnight".to_string(),
        (12, 0) => "noon".to_string(),
        _ => {
            let period = if time.is_am() { "a.m." } else { "p.m." };
            let hour = time.hour12();
            if time.minute == 0 {
                format!("{hour} {period}")
            } else {
                format!("{hour}:{:02} {period}", time.minute)
            }
        }
    }
}
