// Site configuration module
// Explicit configuration for the announcement site, replacing scattered
// environment lookups

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A year plus zero-based month index, bounding the calendar range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    /// 0 = January .. 11 = December
    pub month_index: u32,
}

/// Everything the site needs at initialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub couple_name: String,
    pub wedding_date: NaiveDate,
    /// Fixed "today" for deterministic rendering; falls back to the
    /// system clock when unset
    pub today_override: Option<NaiveDate>,
    pub calendar_start: YearMonth,
    pub calendar_end: YearMonth,
    /// SHA-256 hex digest of the site passphrase
    pub password_digest: String,
    pub session_key: String,
    pub rsvp_endpoint: String,
    pub promo_endpoint: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            couple_name: "Stephanie & Joel".to_string(),
            // February 6, 2026
            wedding_date: NaiveDate::from_ymd_opt(2026, 2, 6).unwrap(),
            today_override: NaiveDate::from_ymd_opt(2025, 5, 27),
            calendar_start: YearMonth {
                year: 2025,
                month_index: 4, // May
            },
            calendar_end: YearMonth {
                year: 2026,
                month_index: 1, // February
            },
            password_digest: "f3347c6800b7fe2ba143f514c5a471f5fcf35bbf26a5cc6cb60207cd840e3fdb"
                .to_string(),
            session_key: "wedding_site_auth".to_string(),
            rsvp_endpoint: "https://stephandjoel.example/".to_string(),
            promo_endpoint: "https://stephandjoel.example/.netlify/functions/verify-promo"
                .to_string(),
        }
    }
}

impl SiteConfig {
    /// The reference "today" used for grid highlighting and the countdown
    pub fn effective_today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
