//! Resolution services

pub mod alarms;
pub mod countdown;
pub mod dashboard;
pub mod prayers;

use std::sync::Arc;

use crate::{clock::Clock, models::jummah::JummahSchedule, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub prayers: prayers::PrayerService,
    pub dashboard: dashboard::DashboardService,
    pub alarms: alarms::AlarmService,
}

impl Services {
    /// Create all services over one repository and clock
    pub fn new(repository: Repository, jummah: JummahSchedule, clock: Arc<dyn Clock>) -> Self {
        let prayers = prayers::PrayerService::new(repository.schedules.clone(), jummah);
        Self {
            dashboard: dashboard::DashboardService::new(prayers.clone(), clock.clone()),
            alarms: alarms::AlarmService::new(repository.schedules, clock),
            prayers,
        }
    }
}
