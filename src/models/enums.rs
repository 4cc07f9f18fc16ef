//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PrayerKey
// ---------------------------------------------------------------------------

/// The six daily timetable entries, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerKey {
    Fajr,
    Shuruq,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerKey {
    /// All keys in catalog order
    pub const ALL: [PrayerKey; 6] = [
        PrayerKey::Fajr,
        PrayerKey::Shuruq,
        PrayerKey::Dhuhr,
        PrayerKey::Asr,
        PrayerKey::Maghrib,
        PrayerKey::Isha,
    ];

    /// Key as used in the schedule document
    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerKey::Fajr => "fajr",
            PrayerKey::Shuruq => "shuruq",
            PrayerKey::Dhuhr => "dhuhr",
            PrayerKey::Asr => "asr",
            PrayerKey::Maghrib => "maghrib",
            PrayerKey::Isha => "isha",
        }
    }
}

impl std::fmt::Display for PrayerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AlarmMode
// ---------------------------------------------------------------------------

/// Morning alarm anchoring modes (mutually exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmMode {
    /// Offset added to the Fajr adhan
    #[default]
    AfterFajr,
    /// Offset subtracted from Shuruq
    BeforeShuruq,
    /// Offset subtracted from the Fajr jamat
    BeforeJamat,
}

impl AlarmMode {
    /// Whether the light alarm toggle is offered in this mode
    pub fn supports_light_alarm(&self) -> bool {
        !matches!(self, AlarmMode::BeforeJamat)
    }
}

impl std::fmt::Display for AlarmMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AlarmMode::AfterFajr => "Add to Fajr",
            AlarmMode::BeforeShuruq => "Prior to Shuruq",
            AlarmMode::BeforeJamat => "Prior to Jamat",
        };
        write!(f, "{}", label)
    }
}
