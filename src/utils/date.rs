//! Date utilities: lenient ISO-8601 parsing, date+time combination,
//! period/range resolution for `list --period` and `export --range`.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse an ISO-8601 timestamp leniently.
///
/// Accepted shapes, in order:
/// - `YYYY-MM-DDTHH:MM:SS` (optionally with fractional seconds)
/// - `YYYY-MM-DDTHH:MM`
/// - the same two with a space instead of `T`
/// - `YYYY-MM-DD` (midnight)
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    parse_date(s).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Canonical stored representation: `YYYY-MM-DDTHH:MM:SS`.
pub fn format_iso(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Combine a `YYYY-MM-DD` date string and an `HH:MM` time string into one
/// timestamp. Both parts are validated strictly.
pub fn combine_date_time(date: &str, time: &str) -> AppResult<NaiveDateTime> {
    let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    let t = crate::utils::time::parse_time(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;
    Ok(d.and_time(t))
}

/// Resolve a period expression into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - ranges `start:end` of any of the above (same format on both sides)
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "start and end must use the same format: {p}"
            )));
        }

        let (s, _) = period_bounds(start)?;
        let (_, e) = period_bounds(end)?;

        if e < s {
            return Err(AppError::InvalidPeriod(format!("end before start: {p}")));
        }

        Ok((s, e))
    } else {
        period_bounds(p.trim())
    }
}

fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(p.to_string());

    // The dispatch below slices by byte offset, valid only for ASCII input.
    if !p.is_ascii() {
        return Err(invalid());
    }

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = p[0..4].parse().map_err(|_| invalid())?;
            let m: u32 = p[5..7].parse().map_err(|_| invalid())?;
            let last = month_last_day(y, m).ok_or_else(invalid)?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
