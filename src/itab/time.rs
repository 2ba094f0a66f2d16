//! Acquisition timestamp resolution.
//!
//! ITAB headers store the acquisition date and time as two free-text strings
//! whose format depends on the acquisition machine's locale.  The wall-clock
//! values are interpreted as UTC: the acquisition site's timezone is not
//! recorded, and using the reading machine's timezone would make the same
//! file decode to different instants on different machines.
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};

use crate::error::{ItabError, Result};

/// Date formats, tried in order.  chrono's `%a`/`%b` only take the
/// three-letter names, so the textual form is listed twice.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%b-%Y", "%a, %b %d, %Y", "%A, %B %d, %Y"];

/// Time formats, tried in order.
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

fn first_match<T>(
    s: &str,
    formats: &[&str],
    parse: fn(&str, &str) -> chrono::ParseResult<T>,
) -> Option<T> {
    let s = s.trim();
    formats.iter().find_map(|fmt| parse(s, fmt).ok())
}

/// Combine the header's date and time strings into one UTC instant.
///
/// ```
/// use itab::itab::time::resolve_meas_date;
/// let t = resolve_meas_date("07-Mar-2016", "10:32").unwrap();
/// assert_eq!(t.to_rfc3339(), "2016-03-07T10:32:00+00:00");
/// ```
pub fn resolve_meas_date(date_str: &str, time_str: &str) -> Result<DateTime<Utc>> {
    let invalid = || ItabError::InvalidTimestamp {
        date: date_str.to_string(),
        time: time_str.to_string(),
    };
    let date = first_match(date_str, &DATE_FORMATS, NaiveDate::parse_from_str)
        .ok_or_else(invalid)?;
    let time = first_match(time_str, &TIME_FORMATS, NaiveTime::parse_from_str)
        .ok_or_else(invalid)?;
    Ok(Utc.from_utc_datetime(&NaiveDateTime::new(date, time)))
}

/// FIFF `meas_date` pair: `(seconds, microseconds)` since the Unix epoch.
pub fn meas_date_parts(t: &DateTime<Utc>) -> (i64, i64) {
    (t.timestamp(), i64::from(t.nanosecond() / 1_000))
}
