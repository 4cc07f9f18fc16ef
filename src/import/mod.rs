//! Spreadsheet import
//!
//! Turns the yearly timetable workbook into the schedule document loaded by
//! [`crate::repository::ScheduleRepository`]. Runs offline, once per
//! timetable revision.

pub mod parser;
pub mod translator;

use std::path::Path;

pub use parser::{Cell, Sheet, Workbook};
pub use translator::{excel_fraction_to_time, ScheduleTranslator};

use crate::{error::AppResult, models::import_report::ImportReport};

/// Import a workbook export and write the schedule document
pub fn import_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> AppResult<ImportReport> {
    let output = output.as_ref();
    let workbook = Workbook::load(input)?;
    let (document, report) = ScheduleTranslator::new().translate(&workbook);

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(output, serde_json::to_string_pretty(&document)?)?;

    tracing::info!(
        "Wrote {} entries to {} ({} skipped)",
        report.entries_written,
        output.display(),
        report.skipped.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::ScheduleRepository;

    #[test]
    fn test_import_file_roundtrips_through_repository() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("workbook.json");
        let output = dir.path().join("data").join("prayer_schedule.json");

        let m = |h: u32, min: u32| (h * 60 + min) as f64 / 1440.0;
        let workbook = serde_json::json!({
            "March 2026": [
                ["Epsom timetable"],
                ["Day", "Date", "Hijri"],
                ["Fri", 6, "17 Ramadan", m(5, 2), m(5, 30), m(6, 30), m(0, 10), m(1, 15),
                 m(3, 30), m(3, 45), m(6, 0), m(7, 20), m(7, 45)]
            ]
        });
        std::fs::write(&input, workbook.to_string()).unwrap();

        let report = import_file(&input, &output).unwrap();
        assert_eq!(report.entries_written, 1);
        assert!(report.skipped.is_empty());

        let repo = ScheduleRepository::load(&output).unwrap();
        let day = repo
            .get(chrono::NaiveDate::from_ymd_opt(2026, 3, 6).unwrap())
            .unwrap();
        assert_eq!(day.dhuhr.jamat.to_string(), "13:15");
        assert_eq!(day.isha.adhan.to_string(), "19:20");
        assert_eq!(day.hijri_label, "17 Ramadan");
    }

    #[test]
    fn test_import_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        assert!(import_file(dir.path().join("absent.json"), dir.path().join("out.json")).is_err());
    }
}
