//! Smart alarm window solver
//!
//! Morning alarms are anchored on today's Fajr/Shuruq/Jamat, the bedtime
//! alarm on today's Isha. All offsets are clamped into the window the mode
//! allows; nothing here fails.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};

use crate::{
    clock::Clock,
    models::{
        alarm::{AlarmConfig, AlarmSummary, BedtimeConfig, LightAlarmState, ResolvedAlarm, SleepDuration},
        enums::AlarmMode,
        schedule::DailySchedule,
        time::TimeOfDay,
    },
    repository::ScheduleRepository,
};

/// An alarm may never land closer than this to sunrise (minutes)
pub const PRE_SHURUQ_BUFFER: i64 = 20;
/// Latest "before jamat" alarm (minutes before the jamat)
pub const PRE_JAMAT_BUFFER: i64 = 10;
/// Earliest "before jamat" alarm (minutes before the jamat)
pub const PRE_JAMAT_MAX_LOOKBACK: i64 = 180;
/// Length of the light alarm brightness ramp (minutes)
pub const LIGHT_RAMP_MINUTES: i64 = 15;

/// `max(lo, min(value, hi))`; a `lo > hi` window yields `lo` and `true`
pub fn clamp_offset(value: i64, lo: i64, hi: i64) -> (i64, bool) {
    if lo > hi {
        return (lo, true);
    }
    (value.min(hi).max(lo), false)
}

fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_minutes()
}

/// Resolve the morning alarm for `today` under the configured mode
pub fn resolve_morning_alarm(today: &DailySchedule, config: &AlarmConfig) -> ResolvedAlarm {
    let fajr = today.fajr.adhan.on(today.date);
    let jamat = today.fajr.jamat.on(today.date);
    let shuruq = today.shuruq.on(today.date);
    let gap = minutes_between(fajr, shuruq);
    let requested = config.offset_minutes as i64;

    let (min_offset, max_offset) = match config.mode {
        AlarmMode::AfterFajr => (0, (gap - PRE_SHURUQ_BUFFER).max(0)),
        AlarmMode::BeforeShuruq => (PRE_SHURUQ_BUFFER, gap),
        AlarmMode::BeforeJamat => (PRE_JAMAT_BUFFER, PRE_JAMAT_MAX_LOOKBACK),
    };
    let (offset, degenerate_window) = clamp_offset(requested, min_offset, max_offset);

    let instant = match config.mode {
        AlarmMode::AfterFajr => fajr + Duration::minutes(offset),
        AlarmMode::BeforeShuruq => shuruq - Duration::minutes(offset),
        AlarmMode::BeforeJamat => jamat - Duration::minutes(offset),
    };

    // Waking before the adhan is allowed in this mode, only flagged
    let pre_prayer_warning = config.mode == AlarmMode::BeforeJamat && instant < fajr;

    ResolvedAlarm {
        instant,
        clamped_offset_minutes: offset,
        min_offset,
        max_offset,
        pre_prayer_warning,
        degenerate_window,
    }
}

/// Resolve the bedtime alarm: Isha adhan plus an offset, capped at midnight
pub fn resolve_bedtime_alarm(today: &DailySchedule, config: &BedtimeConfig) -> ResolvedAlarm {
    let isha = today.isha.adhan.on(today.date);
    let midnight = today
        .date
        .succ_opt()
        .map(|tomorrow| TimeOfDay::MIDNIGHT.on(tomorrow))
        .unwrap_or(isha);
    let max_offset = minutes_between(isha, midnight);
    let (offset, degenerate_window) = clamp_offset(config.offset_minutes as i64, 0, max_offset);

    ResolvedAlarm {
        instant: isha + Duration::minutes(offset),
        clamped_offset_minutes: offset,
        min_offset: 0,
        max_offset,
        pre_prayer_warning: false,
        degenerate_window,
    }
}

/// Sleep between tonight's bedtime and tomorrow's morning alarm.
///
/// `morning` is resolved against today's schedule, so it is moved one day
/// forward before subtracting. Whole minutes, truncated.
pub fn sleep_duration(bedtime: NaiveDateTime, morning: NaiveDateTime) -> SleepDuration {
    let morning_tomorrow = morning + Duration::days(1);
    SleepDuration::from_minutes(minutes_between(bedtime, morning_tomorrow))
}

/// Length of the Fajr window (adhan to sunrise)
pub fn fajr_shuruq_gap(today: &DailySchedule) -> SleepDuration {
    SleepDuration::from_minutes(minutes_between(
        today.fajr.adhan.on(today.date),
        today.shuruq.on(today.date),
    ))
}

/// Light alarm outputs at `now` for an alarm at `alarm`.
///
/// Brightness ramps 0 -> 100 over the last 15 minutes, holds at 100 for the
/// first minute after the alarm, and is 0 otherwise. The flash fires within
/// one second of the alarm.
pub fn light_alarm_state(alarm: NaiveDateTime, now: NaiveDateTime, enabled: bool) -> LightAlarmState {
    if !enabled {
        return LightAlarmState::default();
    }

    let remaining_ms = (alarm - now).num_milliseconds();
    let ramp_ms = LIGHT_RAMP_MINUTES * 60_000;
    let window_open = remaining_ms > 0 && remaining_ms <= ramp_ms;

    let brightness = if window_open {
        let elapsed = (ramp_ms - remaining_ms) as f64 / ramp_ms as f64;
        (elapsed * 100.0).round().clamp(0.0, 100.0) as u8
    } else if (-60_000..=0).contains(&remaining_ms) {
        100
    } else {
        0
    };

    LightAlarmState {
        window_open,
        brightness,
        flash: remaining_ms.abs() < 1_000,
    }
}

/// Alarm screen façade reading `now` from a clock
#[derive(Clone)]
pub struct AlarmService {
    repository: ScheduleRepository,
    clock: Arc<dyn Clock>,
}

impl AlarmService {
    pub fn new(repository: ScheduleRepository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Resolve today's alarms; `None` while today's schedule is unavailable
    pub fn summary(&self, morning: &AlarmConfig, bedtime: &BedtimeConfig) -> Option<AlarmSummary> {
        let now = self.clock.now();
        let Some(today) = self.repository.get(now.date()) else {
            tracing::debug!("No schedule for {}, alarms unresolved", now.date());
            return None;
        };

        let morning_alarm = resolve_morning_alarm(today, morning);
        let bedtime_alarm = resolve_bedtime_alarm(today, bedtime);

        for alarm in [&morning_alarm, &bedtime_alarm] {
            if alarm.degenerate_window {
                tracing::warn!(
                    "Degenerate alarm window on {}: min offset {} exceeds max {}",
                    today.date,
                    alarm.min_offset,
                    alarm.max_offset
                );
            }
        }

        // Only an armed alarm drives the light
        let light_enabled =
            morning.enabled && morning.light_alarm_enabled && morning.mode.supports_light_alarm();

        Some(AlarmSummary {
            morning: morning_alarm,
            morning_enabled: morning.enabled,
            bedtime: bedtime_alarm,
            bedtime_enabled: bedtime.enabled,
            sleep: sleep_duration(bedtime_alarm.instant, morning_alarm.instant),
            fajr_shuruq_gap: fajr_shuruq_gap(today),
            light: light_alarm_state(morning_alarm.instant, now, light_enabled),
        })
    }
}
