// Save-the-Date console companion
// Renders the announcement data (calendar, countdown, schedule legs)
// without the animated shell

use anyhow::Result;
use chrono::Datelike;
use save_the_date::models::calendar::DAYS_PER_WEEK;
use save_the_date::models::schedule;
use save_the_date::services::calendar::{build_month_grid, days_until, enumerate_months};
use save_the_date::services::config::ConfigService;
use save_the_date::services::geo;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting save-the-date preview");

    let config_path = ConfigService::default_config_path()?;
    let config = ConfigService::load_or_default(&config_path)?;

    let today = config.effective_today();
    println!("{}", config.couple_name);
    println!(
        "{} days until the wedding ({})",
        days_until(today, config.wedding_date),
        config.wedding_date
    );

    let months = enumerate_months(
        config.calendar_start.year,
        config.calendar_start.month_index,
        config.calendar_end.year,
        config.calendar_end.month_index,
    );
    println!(
        "Calendar range: {} months ({} to {})",
        months.len(),
        months
            .first()
            .map(|m| format!("{} {}", m.name, m.year))
            .unwrap_or_else(|| "-".to_string()),
        months
            .last()
            .map(|m| format!("{} {}", m.name, m.year))
            .unwrap_or_else(|| "-".to_string()),
    );

    // Text rendering of the wedding month
    if let Some((index, month)) = months
        .iter()
        .enumerate()
        .find(|(_, m)| {
            m.year == config.wedding_date.year() && m.month_index + 1 == config.wedding_date.month()
        })
    {
        println!("\n{} {}", month.name, month.year);
        println!("Mon Tue Wed Thu Fri Sat Sun");
        let cells = build_month_grid(month, index, today, config.wedding_date);
        for row in cells.chunks(DAYS_PER_WEEK) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| {
                    if cell.is_wedding_day {
                        format!("[{:>2}]", cell.day_number)
                    } else if cell.in_displayed_month {
                        format!("{:>3} ", cell.day_number)
                    } else {
                        format!("{:>3}.", cell.day_number)
                    }
                })
                .collect();
            println!("{}", line.join(""));
        }
    }

    println!("\nWedding day schedule:");
    let stops = schedule::default_itinerary();
    for stop in &stops {
        println!("  {:>8}  {} - {}", stop.time, stop.title, stop.location);
    }
    for leg in stops.windows(2) {
        let distance = geo::distance_km(leg[0].coordinate, leg[1].coordinate)?;
        let plan = geo::plan_zoom(leg[0].coordinate, leg[1].coordinate)?;
        println!(
            "  {} -> {}: {:.1} km (zoom {} out, {} in)",
            leg[0].location, leg[1].location, distance, plan.zoom_out, plan.zoom_in
        );
    }

    Ok(())
}
