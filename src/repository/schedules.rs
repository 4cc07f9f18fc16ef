//! Read-only schedule table (date -> daily prayer times)

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::schedule::{parse_date_key, DailySchedule, ScheduleDocument, DATE_KEY_FORMAT},
};

/// Immutable lookup table, cheap to clone and share across threads
#[derive(Debug, Clone, Default)]
pub struct ScheduleRepository {
    days: Arc<BTreeMap<NaiveDate, DailySchedule>>,
}

impl ScheduleRepository {
    /// Build from already-typed schedules, checking ordering and key uniqueness
    pub fn from_days<I>(days: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = DailySchedule>,
    {
        let mut table = BTreeMap::new();
        for day in days {
            day.check_ordering()?;
            let date = day.date;
            if table.insert(date, day).is_some() {
                return Err(AppError::Validation(format!("Duplicate schedule for {}", date)));
            }
        }
        Ok(Self { days: Arc::new(table) })
    }

    /// Build from the serialized document
    pub fn from_document(document: ScheduleDocument) -> AppResult<Self> {
        let days = document
            .into_iter()
            .map(|(key, entry)| Ok(DailySchedule::from_entry(parse_date_key(&key)?, entry)))
            .collect::<AppResult<Vec<_>>>()?;
        Self::from_days(days)
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let document: ScheduleDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Load the schedule document from disk
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read schedule {}: {}", path.display(), e);
            match e.kind() {
                std::io::ErrorKind::NotFound => {
                    AppError::NotFound(format!("Schedule document {}", path.display()))
                }
                _ => AppError::Io(e),
            }
        })?;
        let repository = Self::from_json_str(&json)?;

        match (repository.first_date(), repository.last_date()) {
            (Some(first), Some(last)) => tracing::info!(
                "Loaded {} daily schedules from {} ({} to {})",
                repository.len(),
                path.display(),
                first,
                last
            ),
            _ => tracing::warn!("Schedule {} contains no dates", path.display()),
        }

        Ok(repository)
    }

    /// Schedule for a date; absence is an expected state, not an error
    pub fn get(&self, date: NaiveDate) -> Option<&DailySchedule> {
        self.days.get(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    /// Serialize back into document form, in date order
    pub fn to_document(&self) -> ScheduleDocument {
        self.days
            .iter()
            .map(|(date, day)| (date.format(DATE_KEY_FORMAT).to_string(), day.to_entry()))
            .collect()
    }
}
