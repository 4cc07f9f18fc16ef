//! Convert the yearly timetable workbook (exported as JSON) into the
//! schedule document read by the dashboard.
//!
//! Usage: import-schedule [WORKBOOK_JSON] [OUTPUT_JSON]

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mosque_timetable::import::import_file;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mosque_timetable=info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // File paths - read from args or use defaults
    let args: Vec<String> = std::env::args().collect();
    let input_path = args
        .get(1)
        .map(|s| s.as_str())
        .unwrap_or("data/timetable.json");
    let output_path = args
        .get(2)
        .map(|s| s.as_str())
        .unwrap_or("data/prayer_schedule.json");

    println!("=== Timetable Import ===");
    println!("Workbook: {}", input_path);
    println!("Output: {}", output_path);
    println!();

    let report = import_file(input_path, output_path)
        .with_context(|| format!("Failed to import {}", input_path))?;

    println!("Sheets read: {}", report.sheets_read);
    println!("Entries written: {}", report.entries_written);
    if !report.skipped.is_empty() {
        println!("Skipped: {}", report.skipped.len());
        for skipped in &report.skipped {
            match skipped.row {
                Some(row) => println!("  {} row {}: {:?} {}", skipped.sheet, row, skipped.reason, skipped.detail),
                None => println!("  {}: {:?}", skipped.sheet, skipped.reason),
            }
        }
    }

    Ok(())
}
