// Integration tests for the save-the-date announcement flow

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use test_case::test_case;

use save_the_date::models::calendar::DayCell;
use save_the_date::models::config::SiteConfig;
use save_the_date::models::geo::GeoCoordinate;
use save_the_date::models::rsvp::{Attendance, Rsvp};
use save_the_date::services::access::{digest_hex, AccessGate, AccessState};
use save_the_date::services::calendar::{
    build_continuous_grid, build_month_grid, days_until, enumerate_months,
};
use save_the_date::services::geo::{distance_km, plan_zoom};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_announcement_range_is_ten_months() {
    let months = enumerate_months(2025, 4, 2026, 1);
    let names: Vec<&str> = months.iter().map(|m| m.short_name.as_str()).collect();
    assert_eq!(
        names,
        ["May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]
    );
    assert_eq!(months[7].year, 2025);
    assert_eq!(months[8].year, 2026);
}

#[test]
fn test_opening_month_grid_matches_the_site() {
    let months = enumerate_months(2025, 4, 2026, 1);
    let cells = build_month_grid(&months[0], 0, date(2025, 5, 27), date(2026, 2, 6));

    assert_eq!(cells.len(), 42);
    let days: Vec<u32> = cells.iter().map(|c| c.day_number).collect();
    let mut expected: Vec<u32> = vec![28, 29, 30];
    expected.extend(1..=31);
    expected.extend(1..=8);
    assert_eq!(days, expected);

    let today: Vec<&DayCell> = cells.iter().filter(|c| c.is_today).collect();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].day_number, 27);
}

#[test]
fn test_full_scroll_highlights_each_reference_date_once() {
    let config = SiteConfig::default();
    let months = enumerate_months(
        config.calendar_start.year,
        config.calendar_start.month_index,
        config.calendar_end.year,
        config.calendar_end.month_index,
    );
    let cells = build_continuous_grid(&months, config.effective_today(), config.wedding_date);

    assert_eq!(cells.len(), 10 * 42);
    assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
    assert_eq!(cells.iter().filter(|c| c.is_wedding_day).count(), 1);

    let wedding = cells.iter().find(|c| c.is_wedding_day).unwrap();
    assert_eq!(wedding.day_number, 6);
    assert_eq!(wedding.month_array_index, 9);
}

#[test]
fn test_countdown_matches_the_announcement() {
    let config = SiteConfig::default();
    assert_eq!(days_until(config.effective_today(), config.wedding_date), 255);
}

#[test]
fn test_grid_generation_is_idempotent() {
    let months = enumerate_months(2025, 4, 2026, 1);
    let first = build_continuous_grid(&months, date(2025, 5, 27), date(2026, 2, 6));
    let second = build_continuous_grid(&months, date(2025, 5, 27), date(2026, 2, 6));
    assert_eq!(first, second);

    let again = enumerate_months(2025, 4, 2026, 1);
    assert_eq!(months, again);
}

#[test]
fn test_schedule_legs_drive_the_map() {
    let epping = GeoCoordinate::new(-33.7667, 151.0833).unwrap();
    let marrickville = GeoCoordinate::new(-33.9133, 151.1553).unwrap();

    let distance = distance_km(epping, marrickville).unwrap();
    assert!(distance > 10.0, "expected a long first leg, got {distance}");

    let plan = plan_zoom(epping, marrickville).unwrap();
    assert_eq!((plan.zoom_out, plan.zoom_in), (10, 14));

    let same = plan_zoom(epping, epping).unwrap();
    assert_eq!((same.zoom_out, same.zoom_in), (12, 15));
}

// Points on the equator; one degree of longitude is ~111.19 km
#[test_case(0.009, 12, 15 ; "about one kilometre")]
#[test_case(0.027, 12, 15 ; "about three kilometres")]
#[test_case(0.063, 11, 15 ; "about seven kilometres")]
#[test_case(0.135, 10, 14 ; "about fifteen kilometres")]
fn test_zoom_thresholds(delta_lon: f64, zoom_out: u8, zoom_in: u8) {
    let origin = GeoCoordinate::new(0.0, 0.0).unwrap();
    let target = GeoCoordinate::new(0.0, delta_lon).unwrap();
    let plan = plan_zoom(origin, target).unwrap();
    assert_eq!((plan.zoom_out, plan.zoom_in), (zoom_out, zoom_in));
}

#[test]
fn test_promo_gate_controls_plus_one_fields() {
    let mut rsvp = Rsvp::new("Alice Example", "alice@example.com", Attendance::Yes).unwrap();
    rsvp.meal_preference = Some("Fish".to_string());

    let before: Vec<&str> = rsvp.form_fields().iter().map(|(n, _)| *n).collect();
    assert!(!before.contains(&"plusOne"));

    rsvp.add_plus_one("Bob Example", Some("Beef".to_string()))
        .unwrap();
    let after = rsvp.form_fields();
    assert!(after.contains(&("plusOne", "yes".to_string())));
    assert!(after.contains(&("plusOneName", "Bob Example".to_string())));
    assert!(after.contains(&("plusOneMeal", "Beef".to_string())));
}

#[test]
fn test_access_gate_against_configured_digest() {
    let gate = AccessGate::new(digest_hex("our-secret"));

    let state = gate.try_unlock(AccessState::default(), "guess");
    assert!(!state.authenticated);

    let state = gate.try_unlock(state, "our-secret");
    assert!(state.authenticated);
}
