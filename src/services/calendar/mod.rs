// Calendar service
// Pure generation of the scrolling save-the-date grid

pub mod countdown;
pub mod grid;
pub mod range;

pub use countdown::days_until;
pub use grid::{build_continuous_grid, build_month_grid};
pub use range::enumerate_months;
