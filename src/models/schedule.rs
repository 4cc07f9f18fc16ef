//! Daily schedule models (prayer slots, document entries)

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::enums::PrayerKey;
use super::time::TimeOfDay;
use crate::error::{AppError, AppResult};

/// Date key format used by the schedule document
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// PrayerSlot
// ---------------------------------------------------------------------------

/// Adhan and jamat times of one congregational prayer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerSlot {
    pub adhan: TimeOfDay,
    pub jamat: TimeOfDay,
}

// ---------------------------------------------------------------------------
// ScheduleEntry
// ---------------------------------------------------------------------------

/// One date's entry as stored in the schedule document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub fajr: PrayerSlot,
    pub shuruq: TimeOfDay,
    pub dhuhr: PrayerSlot,
    pub asr: PrayerSlot,
    pub maghrib: PrayerSlot,
    pub isha: PrayerSlot,
    #[serde(default)]
    pub hijri: Option<String>,
}

/// The serialized schedule: `YYYY-MM-DD` keys in date order
pub type ScheduleDocument = IndexMap<String, ScheduleEntry>;

// ---------------------------------------------------------------------------
// DailySchedule
// ---------------------------------------------------------------------------

/// Prayer times for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySchedule {
    pub date: NaiveDate,
    pub fajr: PrayerSlot,
    pub shuruq: TimeOfDay,
    pub dhuhr: PrayerSlot,
    pub asr: PrayerSlot,
    pub maghrib: PrayerSlot,
    pub isha: PrayerSlot,
    pub hijri_label: String,
}

impl DailySchedule {
    pub fn from_entry(date: NaiveDate, entry: ScheduleEntry) -> Self {
        Self {
            date,
            fajr: entry.fajr,
            shuruq: entry.shuruq,
            dhuhr: entry.dhuhr,
            asr: entry.asr,
            maghrib: entry.maghrib,
            isha: entry.isha,
            hijri_label: entry.hijri.unwrap_or_default(),
        }
    }

    pub fn to_entry(&self) -> ScheduleEntry {
        ScheduleEntry {
            fajr: self.fajr,
            shuruq: self.shuruq,
            dhuhr: self.dhuhr,
            asr: self.asr,
            maghrib: self.maghrib,
            isha: self.isha,
            hijri: if self.hijri_label.is_empty() {
                None
            } else {
                Some(self.hijri_label.clone())
            },
        }
    }

    /// Adhan time of an entry (Shuruq has only the one time)
    pub fn adhan(&self, key: PrayerKey) -> TimeOfDay {
        match key {
            PrayerKey::Fajr => self.fajr.adhan,
            PrayerKey::Shuruq => self.shuruq,
            PrayerKey::Dhuhr => self.dhuhr.adhan,
            PrayerKey::Asr => self.asr.adhan,
            PrayerKey::Maghrib => self.maghrib.adhan,
            PrayerKey::Isha => self.isha.adhan,
        }
    }

    /// Jamat time of an entry; none for Shuruq
    pub fn jamat(&self, key: PrayerKey) -> Option<TimeOfDay> {
        match key {
            PrayerKey::Fajr => Some(self.fajr.jamat),
            PrayerKey::Shuruq => None,
            PrayerKey::Dhuhr => Some(self.dhuhr.jamat),
            PrayerKey::Asr => Some(self.asr.jamat),
            PrayerKey::Maghrib => Some(self.maghrib.jamat),
            PrayerKey::Isha => Some(self.isha.jamat),
        }
    }

    /// Adhan anchored on this schedule's date
    pub fn adhan_at(&self, key: PrayerKey) -> NaiveDateTime {
        self.adhan(key).on(self.date)
    }

    /// Check that adhan times strictly increase in catalog order
    pub fn check_ordering(&self) -> AppResult<()> {
        for pair in PrayerKey::ALL.windows(2) {
            let (earlier, later) = (pair[0], pair[1]);
            if self.adhan(earlier) >= self.adhan(later) {
                return Err(AppError::Validation(format!(
                    "Schedule for {}: {} adhan {} is not before {} adhan {}",
                    self.date,
                    earlier,
                    self.adhan(earlier),
                    later,
                    self.adhan(later)
                )));
            }
        }
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` document key
pub fn parse_date_key(key: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|_| AppError::Validation(format!("Invalid date key '{}' (use YYYY-MM-DD)", key)))
}
