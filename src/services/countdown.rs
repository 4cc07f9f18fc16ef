//! Countdown projection

use chrono::NaiveDateTime;

use crate::models::countdown::Countdown;

/// Time left until `target`, never negative.
///
/// A missing or already-reached target yields zero. Hours wrap at 24, the
/// same way the clock face shows them.
pub fn project(target: Option<NaiveDateTime>, now: NaiveDateTime) -> Countdown {
    let Some(target) = target else {
        return Countdown::ZERO;
    };
    if target <= now {
        return Countdown::ZERO;
    }

    let diff = (target - now).num_seconds();
    Countdown {
        hours: ((diff / 3600) % 24) as u32,
        minutes: ((diff / 60) % 60) as u32,
        seconds: (diff % 60) as u32,
    }
}
