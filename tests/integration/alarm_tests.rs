use std::sync::Arc;

use proptest::prelude::*;

use mosque_timetable::{
    clock::FixedClock,
    models::{AlarmConfig, AlarmMode, BedtimeConfig},
    services::alarms::{clamp_offset, resolve_morning_alarm, sleep_duration, AlarmService},
};

use super::{at, date, three_days};

fn morning(mode: AlarmMode, offset_minutes: u32) -> AlarmConfig {
    AlarmConfig {
        mode,
        offset_minutes,
        ..AlarmConfig::default()
    }
}

#[test]
fn test_after_fajr_clamps_to_shuruq_buffer() {
    let repo = three_days();
    let today = repo.get(date(5)).unwrap();
    let alarm = resolve_morning_alarm(today, &morning(AlarmMode::AfterFajr, 1000));
    assert_eq!(alarm.max_offset, 70);
    assert_eq!(alarm.clamped_offset_minutes, 70);
    assert_eq!(alarm.instant, at(5, 6, 10, 0));
}

#[test]
fn test_before_shuruq_bounds() {
    let repo = three_days();
    let today = repo.get(date(5)).unwrap();

    let early = resolve_morning_alarm(today, &morning(AlarmMode::BeforeShuruq, 5));
    assert_eq!((early.min_offset, early.max_offset), (20, 90));
    assert_eq!(early.instant, at(5, 6, 10, 0));

    let late = resolve_morning_alarm(today, &morning(AlarmMode::BeforeShuruq, 200));
    assert_eq!(late.clamped_offset_minutes, 90);
    assert_eq!(late.instant, at(5, 5, 0, 0));
}

#[test]
fn test_before_jamat_warns_before_adhan() {
    let repo = three_days();
    let today = repo.get(date(5)).unwrap();
    let alarm = resolve_morning_alarm(today, &morning(AlarmMode::BeforeJamat, 150));
    assert_eq!(alarm.instant, at(5, 3, 0, 0));
    assert!(alarm.pre_prayer_warning);
}

#[test]
fn test_sleep_duration_crosses_midnight() {
    let sleep = sleep_duration(at(5, 21, 30, 0), at(5, 5, 20, 0));
    assert_eq!((sleep.hours, sleep.minutes), (7, 50));
}

#[test]
fn test_alarm_service_summary() {
    let repo = three_days();
    let service = AlarmService::new(repo, Arc::new(FixedClock(at(5, 20, 0, 0))));
    let summary = service
        .summary(&AlarmConfig::default(), &BedtimeConfig::default())
        .unwrap();

    // 05:00 + 20, and 19:30 + 60
    assert_eq!(summary.morning.instant, at(5, 5, 20, 0));
    assert_eq!(summary.bedtime.instant, at(5, 20, 30, 0));
    assert_eq!(summary.sleep.to_string(), "8h 50m");
    assert_eq!(summary.fajr_shuruq_gap.total_minutes(), 90);
    assert_eq!(summary.light.brightness, 0);
}

#[test]
fn test_disabled_morning_alarm_still_resolved() {
    let service = AlarmService::new(three_days(), Arc::new(FixedClock(at(5, 20, 0, 0))));
    let config = AlarmConfig {
        enabled: false,
        ..AlarmConfig::default()
    };
    let summary = service.summary(&config, &BedtimeConfig::default()).unwrap();

    assert!(!summary.morning_enabled);
    assert!(summary.bedtime_enabled);
    assert_eq!(summary.morning.instant, at(5, 5, 20, 0));
    assert_eq!(summary.sleep.to_string(), "8h 50m");
}

#[test]
fn test_alarm_service_without_schedule() {
    let service = AlarmService::new(three_days(), Arc::new(FixedClock(at(20, 6, 0, 0))));
    assert!(service
        .summary(&AlarmConfig::default(), &BedtimeConfig::default())
        .is_none());
}

proptest! {
    #[test]
    fn prop_clamp_stays_in_window(value in -500i64..500, lo in 0i64..200, width in 0i64..200) {
        let hi = lo + width;
        let (clamped, degenerate) = clamp_offset(value, lo, hi);
        prop_assert!(!degenerate);
        prop_assert!(clamped >= lo && clamped <= hi);
        if (lo..=hi).contains(&value) {
            prop_assert_eq!(clamped, value);
        }
    }
}
