//! Active/next prayer resolution and the Friday display override

use chrono::{Datelike, NaiveDateTime};

use crate::{
    models::{
        jummah::{FridayOverride, JummahSchedule},
        prayer::{NextPrayer, PrayerCatalog, PrayerResolution},
        schedule::DailySchedule,
    },
    repository::ScheduleRepository,
};

/// Resolve the active and next prayer at `now`.
///
/// An adhan instant equal to `now` counts as started: it is active and not
/// upcoming. Before today's Fajr nothing is active. After today's Isha the
/// next prayer is tomorrow's first catalog entry, with an unknown instant
/// when tomorrow's schedule is missing.
pub fn resolve_active_and_next(
    now: NaiveDateTime,
    repo: &ScheduleRepository,
    catalog: &PrayerCatalog,
) -> PrayerResolution {
    let Some(today) = repo.get(now.date()) else {
        return PrayerResolution::default();
    };

    let next = catalog
        .iter()
        .map(|p| (p.key, today.adhan_at(p.key)))
        .find(|(_, instant)| *instant > now)
        .map(|(key, instant)| NextPrayer {
            key,
            instant: Some(instant),
        })
        .or_else(|| {
            let first = catalog.first()?;
            let instant = now
                .date()
                .succ_opt()
                .and_then(|tomorrow| repo.get(tomorrow))
                .map(|tomorrow| tomorrow.adhan_at(first.key));
            Some(NextPrayer {
                key: first.key,
                instant,
            })
        });

    let active = catalog
        .iter()
        .rev()
        .find(|p| today.adhan_at(p.key) <= now)
        .map(|p| p.key);

    PrayerResolution { active, next }
}

/// Dhuhr row override on the congregational weekday; `None` on other days.
///
/// Only the row's name and iqamah switch, at the first slot's iqamah. The
/// adhan shown and used for resolution stays the standard Dhuhr adhan.
pub fn resolve_friday_override(
    now: NaiveDateTime,
    today: &DailySchedule,
    jummah: &JummahSchedule,
) -> Option<FridayOverride> {
    if now.weekday() != jummah.weekday {
        return None;
    }

    let cutoff = jummah.first.iqamah.on(today.date);
    let (slot, cutoff_passed) = if now < cutoff {
        (&jummah.first, false)
    } else {
        (&jummah.second, true)
    };

    Some(FridayOverride {
        display_name: slot.label.clone(),
        display_iqamah: slot.iqamah.on(today.date),
        cutoff_passed,
    })
}

/// Prayer resolution bound to a schedule table
#[derive(Debug, Clone)]
pub struct PrayerService {
    repository: ScheduleRepository,
    catalog: &'static PrayerCatalog,
    jummah: JummahSchedule,
}

impl PrayerService {
    pub fn new(repository: ScheduleRepository, jummah: JummahSchedule) -> Self {
        Self {
            repository,
            catalog: PrayerCatalog::standard(),
            jummah,
        }
    }

    pub fn catalog(&self) -> &'static PrayerCatalog {
        self.catalog
    }

    pub fn today(&self, now: NaiveDateTime) -> Option<&DailySchedule> {
        self.repository.get(now.date())
    }

    pub fn resolve(&self, now: NaiveDateTime) -> PrayerResolution {
        let resolution = resolve_active_and_next(now, &self.repository, self.catalog);
        if resolution.next.is_none() {
            tracing::debug!("No schedule for {}, prayer state unknown", now.date());
        }
        resolution
    }

    pub fn friday_override(&self, now: NaiveDateTime) -> Option<FridayOverride> {
        let today = self.today(now)?;
        resolve_friday_override(now, today, &self.jummah)
    }
}
