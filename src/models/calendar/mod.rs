// Calendar module
// Month metadata and day-cell model for the scrolling save-the-date calendar

use serde::{Deserialize, Serialize};

/// Full month names, indexed 0 (January) to 11 (December)
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Three-letter month abbreviations, same indexing as `MONTH_NAMES`
pub const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Every month block in the scrolling grid is 6 rows of 7 cells
pub const CELLS_PER_MONTH: usize = 42;

/// Cells per grid row (Monday through Sunday)
pub const DAYS_PER_WEEK: usize = 7;

/// Metadata for one calendar month in the displayed range
///
/// Produced once per page load by the month range enumerator and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDescriptor {
    pub year: i32,
    /// Zero-based month, 0 = January .. 11 = December
    pub month_index: u32,
    pub name: String,
    pub short_name: String,
}

impl MonthDescriptor {
    /// Create a descriptor for the given year and zero-based month index
    ///
    /// # Returns
    /// Returns `Result<MonthDescriptor, String>` with validation
    pub fn new(year: i32, month_index: u32) -> Result<Self, String> {
        if month_index > 11 {
            return Err(format!("Month index out of range: {}", month_index));
        }

        Ok(Self {
            year,
            month_index,
            name: MONTH_NAMES[month_index as usize].to_string(),
            short_name: MONTH_SHORT_NAMES[month_index as usize].to_string(),
        })
    }
}

/// One rendered calendar cell, belonging either to the displayed month or
/// to an adjacent padding month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// Day of month shown in the cell, 1..=31
    pub day_number: u32,
    /// False for leading/trailing padding cells from adjacent months
    pub in_displayed_month: bool,
    pub is_today: bool,
    pub is_wedding_day: bool,
    /// Position of the owning month within the enumerated range
    pub month_array_index: usize,
    /// Position of the cell within its 42-cell month block, 0..=41
    pub cell_position: usize,
}
