use std::sync::Arc;

use mosque_timetable::{
    clock::FixedClock,
    models::{Countdown, JummahSchedule, PrayerKey},
    repository::Repository,
    services::{countdown::project, Services},
};

use super::{at, three_days};

fn services_at(day: u32, h: u32, m: u32, s: u32) -> Services {
    Services::new(
        Repository::new(three_days()),
        JummahSchedule::default(),
        Arc::new(FixedClock(at(day, h, m, s))),
    )
}

#[test]
fn test_countdown_never_negative() {
    let now = at(5, 12, 0, 0);
    assert_eq!(project(Some(now), now), Countdown::ZERO);
    assert_eq!(project(Some(now - chrono::Duration::seconds(1)), now), Countdown::ZERO);
}

#[test]
fn test_snapshot_final_seconds_before_asr() {
    let snapshot = services_at(5, 14, 59, 57).dashboard.snapshot();
    assert_eq!(snapshot.next_name.as_deref(), Some("Asr"));
    assert_eq!(snapshot.countdown.to_string(), "00:00:03");
    assert!(snapshot.final_seconds);
    assert_eq!(snapshot.active_row().unwrap().key, PrayerKey::Dhuhr);
}

#[test]
fn test_snapshot_friday_rows() {
    let snapshot = services_at(6, 12, 41, 0).dashboard.snapshot();
    let dhuhr = snapshot.rows.iter().find(|r| r.key == PrayerKey::Dhuhr).unwrap();
    assert_eq!(dhuhr.display_name, "Jummah 2");
    assert_eq!(dhuhr.iqamah.unwrap().to_string(), "13:15");
    assert_eq!(dhuhr.adhan.to_string(), "12:10");
    assert!(dhuhr.is_active);

    let shuruq = snapshot.rows.iter().find(|r| r.key == PrayerKey::Shuruq).unwrap();
    assert!(shuruq.is_sunrise);
    assert!(shuruq.iqamah.is_none());
}

#[test]
fn test_snapshot_without_schedule() {
    let snapshot = services_at(12, 10, 0, 0).dashboard.snapshot();
    assert!(snapshot.rows.is_empty());
    assert!(snapshot.hijri_label.is_none());
    assert_eq!(snapshot.countdown, Countdown::ZERO);
    assert!(!snapshot.final_seconds);
}
