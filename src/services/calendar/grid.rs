// Month grid generation
// Fixed 42-cell (6x7, Monday-first) blocks for the scrolling display

use chrono::NaiveDate;

use crate::models::calendar::{DayCell, MonthDescriptor, CELLS_PER_MONTH};
use crate::utils::date;

/// Build the 42-cell grid for one month
///
/// Leading cells carry the tail of the previous month, trailing cells the
/// head of the next, both flagged as outside the displayed month. The
/// `is_today` / `is_wedding_day` flags are set by exact date equality
/// against the two reference dates.
///
/// # Arguments
/// * `month` - The month to lay out
/// * `month_array_index` - Position of this month within the enumerated range
/// * `today` - Reference date highlighted as "today"
/// * `wedding_day` - Reference date highlighted as the wedding day
pub fn build_month_grid(
    month: &MonthDescriptor,
    month_array_index: usize,
    today: NaiveDate,
    wedding_day: NaiveDate,
) -> Vec<DayCell> {
    let days_in_month = date::days_in_month(month.year, month.month_index);
    let leading = date::first_weekday_offset(month.year, month.month_index) as usize;

    let (prev_year, prev_month_index) = if month.month_index == 0 {
        (month.year - 1, 11)
    } else {
        (month.year, month.month_index - 1)
    };
    let days_in_prev_month = date::days_in_month(prev_year, prev_month_index);

    let mut cells = Vec::with_capacity(CELLS_PER_MONTH);

    // Tail of the previous month, ascending up to its last day
    for i in 0..leading {
        cells.push(DayCell {
            day_number: days_in_prev_month - (leading - 1 - i) as u32,
            in_displayed_month: false,
            is_today: false,
            is_wedding_day: false,
            month_array_index,
            cell_position: cells.len(),
        });
    }

    for day in 1..=days_in_month {
        let cell_date = date::date_from_parts(month.year, month.month_index, day);
        cells.push(DayCell {
            day_number: day,
            in_displayed_month: true,
            is_today: cell_date == Some(today),
            is_wedding_day: cell_date == Some(wedding_day),
            month_array_index,
            cell_position: cells.len(),
        });
    }

    // Head of the next month; saturating keeps the count sane should the
    // leading offset plus month length ever exceed the block size
    let remaining = CELLS_PER_MONTH.saturating_sub(cells.len());
    for day in 1..=remaining {
        cells.push(DayCell {
            day_number: day as u32,
            in_displayed_month: false,
            is_today: false,
            is_wedding_day: false,
            month_array_index,
            cell_position: cells.len(),
        });
    }

    cells
}

/// Concatenate per-month grids into one flat sequence for the scrolling
/// display, preserving month order and the 42-cell block boundaries
pub fn build_continuous_grid(
    months: &[MonthDescriptor],
    today: NaiveDate,
    wedding_day: NaiveDate,
) -> Vec<DayCell> {
    let mut cells = Vec::with_capacity(months.len() * CELLS_PER_MONTH);
    for (month_array_index, month) in months.iter().enumerate() {
        cells.extend(build_month_grid(month, month_array_index, today, wedding_day));
    }
    cells
}
