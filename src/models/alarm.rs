//! Smart alarm models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::AlarmMode;

/// Morning wake-up preferences (snapshot read from the preference store)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AlarmConfig {
    pub mode: AlarmMode,
    /// Minutes relative to the mode's anchor
    pub offset_minutes: u32,
    pub enabled: bool,
    #[validate(length(min = 1, message = "Sound id must not be empty"))]
    pub sound_id: String,
    pub light_alarm_enabled: bool,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            mode: AlarmMode::AfterFajr,
            offset_minutes: 20,
            enabled: true,
            sound_id: "Makkah".to_string(),
            light_alarm_enabled: false,
        }
    }
}

/// Bedtime preferences, offset counted after the Isha adhan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BedtimeConfig {
    pub offset_minutes: u32,
    pub enabled: bool,
    #[validate(length(min = 1, message = "Sound id must not be empty"))]
    pub sound_id: String,
    pub light_control: bool,
}

impl Default for BedtimeConfig {
    fn default() -> Self {
        Self {
            offset_minutes: 60,
            enabled: true,
            sound_id: "Deep Rain Sleep".to_string(),
            light_control: true,
        }
    }
}

/// A clamped alarm instant with the bounds it was clamped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAlarm {
    pub instant: NaiveDateTime,
    pub clamped_offset_minutes: i64,
    pub min_offset: i64,
    pub max_offset: i64,
    /// Alarm lands before the Fajr adhan (advisory only)
    pub pre_prayer_warning: bool,
    /// `min_offset > max_offset`; the offset was pinned to `min_offset`
    pub degenerate_window: bool,
}

/// Whole hours and remaining minutes, floored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepDuration {
    pub hours: i64,
    pub minutes: i64,
}

impl SleepDuration {
    pub fn from_minutes(total: i64) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }
}

impl std::fmt::Display for SleepDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Light alarm outputs for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LightAlarmState {
    /// Within the ramp window; callers should tick every second
    pub window_open: bool,
    /// Screen overlay brightness, 0-100
    pub brightness: u8,
    /// Torch flash is due now
    pub flash: bool,
}

/// Everything the alarm screen shows for today
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmSummary {
    /// Resolved whether or not the alarm is armed
    pub morning: ResolvedAlarm,
    pub morning_enabled: bool,
    pub bedtime: ResolvedAlarm,
    pub bedtime_enabled: bool,
    pub sleep: SleepDuration,
    pub fajr_shuruq_gap: SleepDuration,
    pub light: LightAlarmState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_duration_split() {
        let d = SleepDuration::from_minutes(470);
        assert_eq!(d, SleepDuration { hours: 7, minutes: 50 });
        assert_eq!(d.to_string(), "7h 50m");
        assert_eq!(d.total_minutes(), 470);
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config: AlarmConfig = serde_json::from_str(r#"{"mode": "BEFORE_SHURUQ"}"#).unwrap();
        assert_eq!(config.mode, AlarmMode::BeforeShuruq);
        assert_eq!(config.offset_minutes, 20);
        assert!(config.enabled);

        let bedtime: BedtimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(bedtime, BedtimeConfig::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AlarmConfig::default();
        assert!(config.validate().is_ok());
        config.sound_id.clear();
        assert!(config.validate().is_err());
    }
}
