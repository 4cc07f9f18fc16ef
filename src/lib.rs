//! Mosque Timetable Engine
//!
//! Resolves a mosque's daily prayer timetable against the wall clock: which
//! prayer is active, which is next, how long until it starts, the Friday
//! congregational override, and the smart morning and bedtime alarms.

pub mod clock;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod repository;
pub mod services;

pub use clock::{Clock, SystemClock};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
