//! Configuration management for the timetable dashboard

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::env;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        alarm::{AlarmConfig, BedtimeConfig},
        jummah::JummahSchedule,
    },
};

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ScheduleConfig {
    /// Path of the JSON schedule document
    #[validate(length(min = 1, message = "Schedule path must not be empty"))]
    pub path: String,
}

#[derive(Debug, Default, Deserialize, Clone, Validate)]
#[serde(default)]
pub struct AlarmsConfig {
    #[validate(nested)]
    pub morning: AlarmConfig,
    #[validate(nested)]
    pub bedtime: BedtimeConfig,
}

#[derive(Debug, Deserialize, Clone, Validate)]
#[serde(default)]
pub struct DashboardConfig {
    /// Seconds between dashboard ticks
    #[validate(range(min = 1, max = 3600))]
    pub tick_seconds: u64,
    /// Seconds between alarm screen refreshes
    #[validate(range(min = 1, max = 3600))]
    pub alarm_refresh_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    #[validate(nested)]
    pub jummah: JummahSchedule,
    #[serde(default)]
    #[validate(nested)]
    pub alarms: AlarmsConfig,
    #[serde(default)]
    #[validate(nested)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        Self::build(builder)
    }

    /// Load configuration from one explicit file plus the environment
    pub fn load_from(path: &str) -> AppResult<Self> {
        Self::build(Config::builder().add_source(File::with_name(path)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> AppResult<Self> {
        let config = builder
            .set_default("schedule.path", "data/prayer_schedule.json")?
            // Add environment variables (MOSQUE__ALARMS__MORNING__OFFSET_MINUTES=30)
            .add_source(
                Environment::with_prefix("MOSQUE")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override the schedule path from SCHEDULE_PATH env var if present
            .set_override_option("schedule.path", env::var("SCHEDULE_PATH").ok())?
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            path: "data/prayer_schedule.json".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_seconds: 1,
            alarm_refresh_seconds: 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
