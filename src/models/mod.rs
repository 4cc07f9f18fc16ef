//! Data models for the timetable engine

pub mod alarm;
pub mod countdown;
pub mod enums;
pub mod import_report;
pub mod jummah;
pub mod prayer;
pub mod schedule;
pub mod time;

// Re-export commonly used types
pub use alarm::{AlarmConfig, AlarmSummary, BedtimeConfig, LightAlarmState, ResolvedAlarm, SleepDuration};
pub use countdown::{Countdown, DashboardSnapshot, PrayerRow};
pub use enums::{AlarmMode, PrayerKey};
pub use import_report::{ImportReport, SkipReason, SkippedRow};
pub use jummah::{FridayOverride, JummahSchedule, JummahSlot};
pub use prayer::{NextPrayer, PrayerCatalog, PrayerDefinition, PrayerResolution};
pub use schedule::{DailySchedule, PrayerSlot, ScheduleDocument, ScheduleEntry};
pub use time::TimeOfDay;
