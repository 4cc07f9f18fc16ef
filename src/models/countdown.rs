//! Countdown and dashboard view models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::enums::PrayerKey;
use super::time::TimeOfDay;

/// Seconds at the end of a countdown that get an audible or visual cue
pub const FINAL_SECONDS: u32 = 4;

/// Remaining time split for display; integers, padding happens in `Display`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown { hours: 0, minutes: 0, seconds: 0 };

    /// Within the last few seconds (zero itself excluded)
    pub fn in_final_seconds(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && (1..=FINAL_SECONDS).contains(&self.seconds)
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// One row of the timetable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerRow {
    pub key: PrayerKey,
    pub display_name: String,
    pub icon: String,
    pub adhan: TimeOfDay,
    pub iqamah: Option<TimeOfDay>,
    pub is_sunrise: bool,
    pub is_active: bool,
}

/// Everything the dashboard renders for one tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub now: NaiveDateTime,
    pub date: NaiveDate,
    /// None while today's schedule is unavailable
    pub hijri_label: Option<String>,
    pub rows: Vec<PrayerRow>,
    pub next_name: Option<String>,
    pub next_instant: Option<NaiveDateTime>,
    pub countdown: Countdown,
    pub final_seconds: bool,
}

impl DashboardSnapshot {
    pub fn active_row(&self) -> Option<&PrayerRow> {
        self.rows.iter().find(|r| r.is_active)
    }
}
