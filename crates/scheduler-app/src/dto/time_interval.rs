use chrono::NaiveTime;
use scheduler_core::time_interval::TimeInterval;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::invalid;

/// Times of day as `HH:MM:SS` (seconds may be omitted).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_interval"))]
pub struct TimeIntervalDto {
  pub start: NaiveTime,
  pub end:   NaiveTime,
}

impl TimeIntervalDto {
  pub fn to_interval(self) -> scheduler_core::Result<TimeInterval> {
    TimeInterval::new(self.start, self.end)
  }
}

fn validate_interval(dto: &TimeIntervalDto) -> Result<(), ValidationError> {
  dto
    .to_interval()
    .map(|_| ())
    .map_err(|e| invalid("time", e.to_string()))
}
