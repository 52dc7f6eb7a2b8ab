// Date utility functions

use chrono::{Datelike, NaiveDate};

/// Number of days in the given month (zero-based month index)
///
/// Uses the day before the first of the following month, so leap years
/// fall out of chrono's calendar arithmetic rather than a lookup table.
pub fn days_in_month(year: i32, month_index: u32) -> u32 {
    let (next_year, next_month_index) = if month_index >= 11 {
        (year + 1, 0)
    } else {
        (year, month_index + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month_index + 1, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last_day| last_day.day())
        .unwrap_or(0)
}

/// Weekday of day 1 of the month, remapped so Monday = 0 .. Sunday = 6
///
/// The Monday-first week is a fixed design choice of the calendar layout,
/// not a configurable setting.
pub fn first_weekday_offset(year: i32, month_index: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month_index + 1, 1)
        .map(|first| first.weekday().num_days_from_monday())
        .unwrap_or(0)
}

/// Build a date from a year and zero-based month index
pub fn date_from_parts(year: i32, month_index: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month_index + 1, day)
}
