// Month range enumeration

use crate::models::calendar::{MonthDescriptor, MONTH_NAMES, MONTH_SHORT_NAMES};

/// Enumerate the months from start to end, inclusive
///
/// Month indices are zero-based (0 = January). The walk advances one
/// calendar month at a time, rolling the index from 11 back to 0 and
/// bumping the year. A start after the end yields an empty sequence,
/// which renders as an empty calendar rather than an error.
pub fn enumerate_months(
    start_year: i32,
    start_month_index: u32,
    end_year: i32,
    end_month_index: u32,
) -> Vec<MonthDescriptor> {
    if start_month_index > 11 || end_month_index > 11 {
        log::warn!(
            "Ignoring month range with out-of-range index: {}..{}",
            start_month_index,
            end_month_index
        );
        return Vec::new();
    }

    let mut months = Vec::new();
    let mut current_year = start_year;
    let mut current_month_index = start_month_index;

    // (year, month_index) increases strictly each turn, so this terminates
    while current_year < end_year
        || (current_year == end_year && current_month_index <= end_month_index)
    {
        months.push(MonthDescriptor {
            year: current_year,
            month_index: current_month_index,
            name: MONTH_NAMES[current_month_index as usize].to_string(),
            short_name: MONTH_SHORT_NAMES[current_month_index as usize].to_string(),
        });

        current_month_index += 1;
        if current_month_index > 11 {
            current_month_index = 0;
            current_year += 1;
        }
    }

    months
}
