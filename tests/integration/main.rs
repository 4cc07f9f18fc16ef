//! End-to-end tests through the public API

mod alarm_tests;
mod dashboard_tests;
mod import_tests;
mod resolver_tests;

use chrono::{NaiveDate, NaiveDateTime};
use mosque_timetable::repository::ScheduleRepository;

/// 2026-03-05 is a Thursday, 2026-03-06 a Friday
pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

pub fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
    date(day).and_hms_opt(h, m, s).unwrap()
}

/// One schedule day as a document entry
pub fn day_json(fajr: &str, fajr_jamat: &str, shuruq: &str) -> serde_json::Value {
    serde_json::json!({
        "fajr": {"adhan": fajr, "jamat": fajr_jamat},
        "shuruq": shuruq,
        "dhuhr": {"adhan": "12:10", "jamat": "12:30"},
        "asr": {"adhan": "15:00", "jamat": "15:15"},
        "maghrib": {"adhan": "18:00", "jamat": "18:00"},
        "isha": {"adhan": "19:30", "jamat": "19:45"},
        "hijri": "16 Ramadan 1447"
    })
}

/// Three consecutive days, 5th to 7th March 2026
pub fn three_days() -> ScheduleRepository {
    let document = serde_json::json!({
        "2026-03-05": day_json("05:00", "05:30", "06:30"),
        "2026-03-06": day_json("04:58", "05:30", "06:28"),
        "2026-03-07": day_json("04:56", "05:30", "06:26"),
    });
    ScheduleRepository::from_json_str(&document.to_string()).unwrap()
}
