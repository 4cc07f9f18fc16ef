//! Prayer catalog and resolution results

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::enums::PrayerKey;

/// Display definition of one timetable row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerDefinition {
    pub key: PrayerKey,
    pub display_name: &'static str,
    /// Material symbol name
    pub icon: &'static str,
    pub is_sunrise: bool,
}

/// Ordered prayer definitions; the order drives every resolver iteration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerCatalog {
    entries: Vec<PrayerDefinition>,
}

static STANDARD_CATALOG: Lazy<PrayerCatalog> = Lazy::new(|| PrayerCatalog {
    entries: vec![
        PrayerDefinition { key: PrayerKey::Fajr, display_name: "Fajr", icon: "wb_twilight", is_sunrise: false },
        PrayerDefinition { key: PrayerKey::Shuruq, display_name: "Shuruq", icon: "light_mode", is_sunrise: true },
        PrayerDefinition { key: PrayerKey::Dhuhr, display_name: "Dhuhr", icon: "sunny", is_sunrise: false },
        PrayerDefinition { key: PrayerKey::Asr, display_name: "Asr", icon: "wb_sunny", is_sunrise: false },
        PrayerDefinition { key: PrayerKey::Maghrib, display_name: "Maghrib", icon: "wb_twilight", is_sunrise: false },
        PrayerDefinition { key: PrayerKey::Isha, display_name: "Isha", icon: "bedtime", is_sunrise: false },
    ],
});

impl PrayerCatalog {
    /// The six-entry catalog shared by the whole process
    pub fn standard() -> &'static PrayerCatalog {
        &STANDARD_CATALOG
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrayerDefinition> {
        self.entries.iter()
    }

    pub fn get(&self, key: PrayerKey) -> Option<&PrayerDefinition> {
        self.entries.iter().find(|p| p.key == key)
    }

    /// First entry of the day, the rollover target after Isha
    pub fn first(&self) -> Option<&PrayerDefinition> {
        self.entries.first()
    }
}

/// The upcoming prayer; `instant` is unknown when tomorrow's schedule is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextPrayer {
    pub key: PrayerKey,
    pub instant: Option<NaiveDateTime>,
}

/// Active and next prayer at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrayerResolution {
    /// None before Fajr or when today's schedule is missing
    pub active: Option<PrayerKey>,
    /// None only when today's schedule is missing
    pub next: Option<NextPrayer>,
}
