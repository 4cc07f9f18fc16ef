//! Mosque Timetable - dashboard runner
//!
//! Loads the schedule document and ticks the dashboard and alarm resolution
//! against the system clock until interrupted.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDateTime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mosque_timetable::{
    config::AppConfig,
    models::{AlarmSummary, DashboardSnapshot, PrayerKey, TimeOfDay},
    repository::Repository,
    services::Services,
    SystemClock,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("mosque_timetable={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Mosque Timetable v{}", env!("CARGO_PKG_VERSION"));

    let repository = Repository::load(&config.schedule.path)
        .with_context(|| format!("Failed to load schedule from {}", config.schedule.path))?;

    let services = Services::new(repository, config.jummah.clone(), Arc::new(SystemClock));

    let mut dashboard_tick = tokio::time::interval(Duration::from_secs(config.dashboard.tick_seconds));
    let mut alarm_tick = tokio::time::interval(Duration::from_secs(config.dashboard.alarm_refresh_seconds));

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut last_state: Option<ReportedState> = None;
    let mut light_window_open = false;

    loop {
        tokio::select! {
            _ = dashboard_tick.tick() => {
                let snapshot = services.dashboard.snapshot();
                report_snapshot(&snapshot, &mut last_state);

                // The light ramp needs per-second resolution while open
                if light_window_open {
                    light_window_open = refresh_alarms(&services, &config);
                }
            }
            _ = alarm_tick.tick() => {
                light_window_open = refresh_alarms(&services, &config);
            }
            result = &mut shutdown => {
                result.context("Failed to listen for shutdown signal")?;
                tracing::info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Active and next prayer last reported, with whether today had a timetable
type ReportedState = (bool, Option<PrayerKey>, Option<String>);

/// Record the snapshot's state; true when it differs from the last report
fn state_changed(snapshot: &DashboardSnapshot, last_state: &mut Option<ReportedState>) -> bool {
    let state = (
        !snapshot.rows.is_empty(),
        snapshot.active_row().map(|r| r.key),
        snapshot.next_name.clone(),
    );
    if last_state.as_ref() == Some(&state) {
        return false;
    }
    *last_state = Some(state);
    true
}

/// Log the dashboard state on transitions only
fn report_snapshot(snapshot: &DashboardSnapshot, last_state: &mut Option<ReportedState>) {
    if state_changed(snapshot, last_state) {
        if snapshot.rows.is_empty() {
            tracing::warn!("No timetable for {}", snapshot.date);
        } else {
            tracing::info!(
                "{} | active: {} | next: {} in {}",
                snapshot.hijri_label.as_deref().unwrap_or("-"),
                snapshot.active_row().map(|r| r.display_name.as_str()).unwrap_or("-"),
                snapshot.next_name.as_deref().unwrap_or("-"),
                snapshot.countdown
            );
        }
    }

    if snapshot.final_seconds {
        tracing::info!("Adhan cue: {} left", snapshot.countdown);
    }
}

/// Resolve and log today's alarms; returns whether the light ramp is open
fn refresh_alarms(services: &Services, config: &AppConfig) -> bool {
    let Some(summary) = services
        .alarms
        .summary(&config.alarms.morning, &config.alarms.bedtime)
    else {
        return false;
    };
    log_alarms(&summary);
    summary.light.window_open
}

/// `05:20 AM` style, as the alarm screen shows it
fn format_ampm(instant: NaiveDateTime) -> String {
    let (time, suffix) = TimeOfDay::from(instant.time()).to_12_hour();
    format!("{} {}", time, suffix)
}

fn armed(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

fn log_alarms(summary: &AlarmSummary) {
    let morning = &summary.morning;
    tracing::debug!(
        "Morning alarm at {} [{}] (offset {} in [{}, {}])",
        format_ampm(morning.instant),
        armed(summary.morning_enabled),
        morning.clamped_offset_minutes,
        morning.min_offset,
        morning.max_offset
    );
    if summary.morning_enabled && morning.pre_prayer_warning {
        tracing::info!("Morning alarm rings before the Fajr adhan");
    }
    tracing::debug!(
        "Bedtime alarm at {} [{}]",
        format_ampm(summary.bedtime.instant),
        armed(summary.bedtime_enabled)
    );
    tracing::debug!(
        "Sleep duration {}, Fajr window {}",
        summary.sleep,
        summary.fajr_shuruq_gap
    );
    if summary.light.window_open || summary.light.brightness > 0 {
        tracing::debug!(
            "Light alarm brightness {}%{}",
            summary.light.brightness,
            if summary.light.flash { " (flash)" } else { "" }
        );
    }
}
