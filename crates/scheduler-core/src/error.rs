//! Error types for `scheduler-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid time zone: {0:?}")]
  InvalidTimeZone(String),

  #[error("time interval end {end} must be after start {start}")]
  InvalidInterval {
    start: chrono::NaiveTime,
    end:   chrono::NaiveTime,
  },

  #[error("day of week must be in 1..=7, got {0}")]
  InvalidDayOfWeek(u8),

  #[error("day of month must be in 1..=31, got {0}")]
  InvalidDayOfMonth(u8),

  #[error("{0} periodicity requires at least one day")]
  EmptyDaySet(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
