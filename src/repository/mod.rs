//! Repository layer for schedule data

pub mod schedules;

use std::path::Path;

use crate::error::AppResult;

pub use schedules::ScheduleRepository;

/// Main repository struct holding the loaded tables
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub schedules: ScheduleRepository,
}

impl Repository {
    /// Create a repository around an already-built schedule table
    pub fn new(schedules: ScheduleRepository) -> Self {
        Self { schedules }
    }

    /// Load all tables from the schedule document at `path`
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        Ok(Self::new(ScheduleRepository::load(path)?))
    }
}
