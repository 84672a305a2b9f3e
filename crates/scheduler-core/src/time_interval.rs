//! A bounded time-of-day interval.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// `[start, end)` within a single day. `end` is strictly after `start`, so an
/// interval never wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct TimeInterval {
  start: NaiveTime,
  end:   NaiveTime,
}

impl TimeInterval {
  pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
    if end <= start {
      return Err(Error::InvalidInterval { start, end });
    }
    Ok(Self { start, end })
  }

  pub fn start(&self) -> NaiveTime { self.start }

  pub fn end(&self) -> NaiveTime { self.end }
}

#[derive(Deserialize)]
struct RawInterval {
  start: NaiveTime,
  end:   NaiveTime,
}

impl TryFrom<RawInterval> for TimeInterval {
  type Error = Error;

  fn try_from(raw: RawInterval) -> Result<Self> { Self::new(raw.start, raw.end) }
}
