use mosque_timetable::{import::import_file, models::SkipReason, repository::ScheduleRepository};

use super::date;

fn fraction(h: u32, m: u32) -> f64 {
    (h * 60 + m) as f64 / 1440.0
}

#[test]
fn test_import_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("timetable.json");
    let output = dir.path().join("prayer_schedule.json");

    let row = |day: u32| {
        serde_json::json!([
            "", day, format!("{} Ramadan", day + 11),
            fraction(5, 0), fraction(5, 30), fraction(6, 30),
            fraction(0, 10), fraction(0, 30),
            fraction(3, 0), fraction(3, 15),
            fraction(6, 0), fraction(7, 30), fraction(7, 45)
        ])
    };
    let workbook = serde_json::json!({
        "Cover": [["Epsom & Ewell Islamic Society"]],
        "March 2026": [["March"], ["Day", "Date"], row(5), row(6), row(32)]
    });
    std::fs::write(&input, workbook.to_string()).unwrap();

    let report = import_file(&input, &output).unwrap();
    assert_eq!(report.sheets_read, 1);
    assert_eq!(report.entries_written, 2);
    let reasons: Vec<SkipReason> = report.skipped.iter().map(|s| s.reason.clone()).collect();
    assert_eq!(reasons, vec![SkipReason::UnrecognizedSheetName, SkipReason::InvalidDate]);

    let repo = ScheduleRepository::load(&output).unwrap();
    assert_eq!(repo.first_date(), Some(date(5)));
    assert_eq!(repo.last_date(), Some(date(6)));
    let day = repo.get(date(6)).unwrap();
    assert_eq!(day.asr.adhan.to_string(), "15:00");
    assert_eq!(day.isha.jamat.to_string(), "19:45");
    assert_eq!(day.hijri_label, "17 Ramadan");
}
