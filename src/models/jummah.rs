//! Friday congregational slots

use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::time::TimeOfDay;

/// One Jummah congregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct JummahSlot {
    #[validate(length(min = 1, message = "Jummah label must not be empty"))]
    pub label: String,
    pub iqamah: TimeOfDay,
}

/// The community's two Jummah slots and the day they are held
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct JummahSchedule {
    pub weekday: Weekday,
    #[validate(nested)]
    pub first: JummahSlot,
    #[validate(nested)]
    pub second: JummahSlot,
}

impl Default for JummahSchedule {
    fn default() -> Self {
        Self {
            weekday: Weekday::Fri,
            first: JummahSlot {
                label: "Jummah 1".to_string(),
                iqamah: TimeOfDay::from_hm(12, 40),
            },
            second: JummahSlot {
                label: "Jummah 2".to_string(),
                iqamah: TimeOfDay::from_hm(13, 15),
            },
        }
    }
}

/// Dhuhr row rendering inputs on the congregational day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FridayOverride {
    pub display_name: String,
    pub display_iqamah: NaiveDateTime,
    /// Now is at or after the first slot's iqamah
    pub cutoff_passed: bool,
}
