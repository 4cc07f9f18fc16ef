use chrono::Duration;
use proptest::prelude::*;

use mosque_timetable::{
    models::{JummahSchedule, PrayerCatalog, PrayerKey},
    services::prayers::{resolve_active_and_next, resolve_friday_override, PrayerService},
};

use super::{at, date, three_days};

#[test]
fn test_nothing_active_before_fajr() {
    let repo = three_days();
    let resolution = resolve_active_and_next(at(5, 3, 0, 0), &repo, PrayerCatalog::standard());
    assert_eq!(resolution.active, None);
    let next = resolution.next.unwrap();
    assert_eq!(next.key, PrayerKey::Fajr);
    assert_eq!(next.instant, Some(at(5, 5, 0, 0)));
}

#[test]
fn test_after_isha_next_is_tomorrows_fajr() {
    let repo = three_days();
    for now in [at(5, 19, 30, 0), at(5, 22, 0, 0), at(5, 23, 59, 59)] {
        let resolution = resolve_active_and_next(now, &repo, PrayerCatalog::standard());
        assert_eq!(resolution.active, Some(PrayerKey::Isha));
        let next = resolution.next.unwrap();
        assert_eq!(next.key, PrayerKey::Fajr);
        assert_eq!(next.instant, Some(at(6, 4, 58, 0)));
    }
}

#[test]
fn test_last_day_has_unknown_next_instant() {
    let repo = three_days();
    let resolution = resolve_active_and_next(at(7, 21, 0, 0), &repo, PrayerCatalog::standard());
    let next = resolution.next.unwrap();
    assert_eq!(next.key, PrayerKey::Fajr);
    assert_eq!(next.instant, None);
}

#[test]
fn test_missing_day_resolves_to_nothing() {
    let repo = three_days();
    let resolution = resolve_active_and_next(at(9, 12, 0, 0), &repo, PrayerCatalog::standard());
    assert_eq!(resolution.active, None);
    assert!(resolution.next.is_none());
}

#[test]
fn test_friday_override_switches_at_first_iqamah() {
    let repo = three_days();
    let jummah = JummahSchedule::default();
    let friday = repo.get(date(6)).unwrap();

    let before = resolve_friday_override(at(6, 12, 30, 0), friday, &jummah).unwrap();
    assert_eq!(before.display_name, jummah.first.label);
    assert!(!before.cutoff_passed);

    let after = resolve_friday_override(at(6, 12, 41, 0), friday, &jummah).unwrap();
    assert_eq!(after.display_name, jummah.second.label);
    assert!(after.cutoff_passed);

    // Resolution still runs on the standard Dhuhr adhan
    let service = PrayerService::new(repo.clone(), jummah);
    let resolution = service.resolve(at(6, 12, 30, 0));
    assert_eq!(resolution.active, Some(PrayerKey::Dhuhr));
    assert_eq!(resolution.next.unwrap().key, PrayerKey::Asr);
    assert_eq!(
        service.resolve(at(6, 12, 9, 0)).next.unwrap().instant,
        Some(at(6, 12, 10, 0))
    );
}

#[test]
fn test_no_override_on_thursday() {
    let repo = three_days();
    let thursday = repo.get(date(5)).unwrap();
    assert!(resolve_friday_override(at(5, 12, 30, 0), thursday, &JummahSchedule::default()).is_none());
}

proptest! {
    #[test]
    fn prop_active_and_next_bracket_now(seconds in 0i64..86_400) {
        let repo = three_days();
        let catalog = PrayerCatalog::standard();
        let now = at(6, 0, 0, 0) + Duration::seconds(seconds);
        let today = repo.get(date(6)).unwrap();
        let resolution = resolve_active_and_next(now, &repo, catalog);

        if let Some(active) = resolution.active {
            prop_assert!(today.adhan_at(active) <= now);
            // Latest started prayer: everything started so far comes no later
            for p in catalog.iter() {
                if today.adhan_at(p.key) <= now {
                    prop_assert!(p.key <= active);
                }
            }
        } else {
            prop_assert!(now < today.adhan_at(PrayerKey::Fajr));
        }

        let next = resolution.next.unwrap();
        let instant = next.instant.unwrap();
        prop_assert!(instant > now);

        // Consecutive: nothing in the catalog starts between active and next
        for p in catalog.iter() {
            let adhan = today.adhan_at(p.key);
            prop_assert!(!(adhan > now && adhan < instant));
        }
    }
}
