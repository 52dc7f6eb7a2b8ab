// Countdown to the wedding day

use chrono::NaiveDate;

/// Whole days from `today` until `wedding_day`
///
/// Zero on the day itself, negative once it has passed.
pub fn days_until(today: NaiveDate, wedding_day: NaiveDate) -> i64 {
    wedding_day.signed_duration_since(today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_countdown_from_announcement_day() {
        // May 27, 2025 to February 6, 2026
        assert_eq!(days_until(date(2025, 5, 27), date(2026, 2, 6)), 255);
    }

    #[test]
    fn test_countdown_on_the_day_is_zero() {
        assert_eq!(days_until(date(2026, 2, 6), date(2026, 2, 6)), 0);
    }

    #[test]
    fn test_countdown_goes_negative_afterwards() {
        assert_eq!(days_until(date(2026, 2, 7), date(2026, 2, 6)), -1);
    }
}
