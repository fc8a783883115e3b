//! Polling schedule.
//!
//! The interval between cycles depends on the time of day and the day of
//! the week: configured windows (e.g. weekday rush hours) poll faster than
//! the base interval.

mod interval;
mod scheduler;

pub use interval::{select_interval, window_applies};
pub use scheduler::{Scheduler, SchedulerError};
