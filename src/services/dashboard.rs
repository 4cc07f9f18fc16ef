//! Dashboard view model (timetable rows, next prayer, countdown)

use std::sync::Arc;

use chrono::NaiveDateTime;

use super::{countdown, prayers::PrayerService};
use crate::{
    clock::Clock,
    models::{
        countdown::{Countdown, DashboardSnapshot, PrayerRow},
        enums::PrayerKey,
        time::TimeOfDay,
    },
};

#[derive(Clone)]
pub struct DashboardService {
    prayers: PrayerService,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(prayers: PrayerService, clock: Arc<dyn Clock>) -> Self {
        Self { prayers, clock }
    }

    /// Snapshot at the clock's current instant
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.snapshot_at(self.clock.now())
    }

    /// Snapshot at an explicit instant
    pub fn snapshot_at(&self, now: NaiveDateTime) -> DashboardSnapshot {
        let Some(today) = self.prayers.today(now) else {
            return DashboardSnapshot {
                now,
                date: now.date(),
                hijri_label: None,
                rows: Vec::new(),
                next_name: None,
                next_instant: None,
                countdown: Countdown::ZERO,
                final_seconds: false,
            };
        };

        let catalog = self.prayers.catalog();
        let resolution = self.prayers.resolve(now);
        let friday = self.prayers.friday_override(now);

        let rows = catalog
            .iter()
            .map(|p| {
                let mut display_name = p.display_name.to_string();
                let mut iqamah = today.jamat(p.key);
                if let (PrayerKey::Dhuhr, Some(o)) = (p.key, friday.as_ref()) {
                    display_name = o.display_name.clone();
                    iqamah = Some(TimeOfDay::from(o.display_iqamah.time()));
                }
                PrayerRow {
                    key: p.key,
                    display_name,
                    icon: p.icon.to_string(),
                    adhan: today.adhan(p.key),
                    iqamah,
                    is_sunrise: p.is_sunrise,
                    is_active: resolution.active == Some(p.key),
                }
            })
            .collect();

        let next_name = resolution
            .next
            .and_then(|n| catalog.get(n.key))
            .map(|p| p.display_name.to_string());
        let next_instant = resolution.next.and_then(|n| n.instant);
        let countdown = countdown::project(next_instant, now);

        tracing::debug!(
            "Dashboard at {}: active={:?} next={:?} countdown={}",
            now,
            resolution.active,
            next_name,
            countdown
        );

        DashboardSnapshot {
            now,
            date: today.date,
            hijri_label: Some(today.hijri_label.clone()),
            rows,
            next_name,
            next_instant,
            countdown,
            final_seconds: countdown.in_final_seconds(),
        }
    }
}
