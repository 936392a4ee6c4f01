//! Tests for period/range expressions used by `list --period` and
//! `export --range`.

use chrono::NaiveDate;
use runlogger::errors::AppError;
use runlogger::utils::date::parse_period;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn year_expands_to_full_year() {
    let (start, end) = parse_period("2025").unwrap();
    assert_eq!(start, ymd(2025, 1, 1));
    assert_eq!(end, ymd(2025, 12, 31));
}

#[test]
fn month_expands_to_full_month() {
    let (start, end) = parse_period("2024-02").unwrap();
    assert_eq!(start, ymd(2024, 2, 1));
    assert_eq!(end, ymd(2024, 2, 29)); // leap year
}

#[test]
fn day_expands_to_itself() {
    let (start, end) = parse_period("2025-06-18").unwrap();
    assert_eq!(start, ymd(2025, 6, 18));
    assert_eq!(end, ymd(2025, 6, 18));
}

#[test]
fn range_spans_both_bounds() {
    let (start, end) = parse_period("2025-09-01:2025-09-10").unwrap();
    assert_eq!(start, ymd(2025, 9, 1));
    assert_eq!(end, ymd(2025, 9, 10));
}

#[test]
fn mixed_format_range_is_rejected() {
    assert!(matches!(
        parse_period("2025:2025-09"),
        Err(AppError::InvalidPeriod(_))
    ));
}

#[test]
fn end_before_start_is_rejected() {
    assert!(matches!(
        parse_period("2025-09-10:2025-09-01"),
        Err(AppError::InvalidPeriod(_))
    ));
}

#[test]
fn garbage_input_is_rejected() {
    for p in ["", "sept", "20250", "2025-13", "2025-02-30"] {
        assert!(
            matches!(parse_period(p), Err(AppError::InvalidPeriod(_))),
            "period '{p}' should be rejected"
        );
    }
}

#[test]
fn multibyte_input_is_rejected_not_a_panic() {
    // "abcdéf" is 7 bytes, the length of a YYYY-MM expression, with a
    // char boundary inside the would-be month slice.
    for p in ["abcdéf", "éé-éé", "2025:éééé", "日本語"] {
        assert!(
            matches!(parse_period(p), Err(AppError::InvalidPeriod(_))),
            "period '{p}' should be rejected"
        );
    }
}
