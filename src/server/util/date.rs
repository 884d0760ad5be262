//! Calendar helpers shared by the attendance, leave, schedule and monitoring services.
//!
//! Dates on the wire are `YYYY-MM-DD`, times are `HH:MM` (seconds optional). Day-based
//! filters are evaluated as half-open UTC ranges `[start, next day)`.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

/// Parses a shift or break time given as `HH:MM` or `HH:MM:SS`.
pub fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
}

/// Midnight UTC at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Half-open UTC range covering the single day `date`.
pub fn day_range(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = start_of_day(date);
    (start, start + TimeDelta::days(1))
}

/// Half-open UTC range covering every day from `start` through `end` inclusive.
pub fn inclusive_range(start: NaiveDate, end: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    (start_of_day(start), start_of_day(end) + TimeDelta::days(1))
}

/// First and last day of a calendar month.
///
/// # Arguments
/// - `year` - Calendar year
/// - `month` - Month number, 1 through 12
///
/// # Returns
/// - `Some((first, last))` - Both bounds are inclusive
/// - `None` - Month is out of range
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    Some((first, next_first.pred_opt()?))
}

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - TimeDelta::days(date.weekday().num_days_from_monday() as i64)
}

/// Number of days from `start` through `end` inclusive; zero when `end` precedes `start`.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    ((end - start).num_days() + 1).max(0)
}
