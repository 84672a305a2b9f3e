//! Office: the tenancy root.
//!
//! Every client, group, and subject belongs to exactly one office. The office
//! id is assigned by the store on creation and never changes afterwards.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── TimeZone ────────────────────────────────────────────────────────────────

/// An IANA time-zone name such as `Europe/Moscow`, `Japan` or `UTC`.
///
/// Names are resolved against the tz database bundled by `chrono-tz`; links
/// keep their own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeZone(Tz);

impl TimeZone {
  pub fn parse(name: &str) -> Result<Self> {
    let name = name.trim();
    name
      .parse::<Tz>()
      .map(Self)
      .map_err(|_| Error::InvalidTimeZone(name.to_owned()))
  }

  pub fn as_str(&self) -> &'static str { self.0.name() }
}

impl fmt::Display for TimeZone {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for TimeZone {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl TryFrom<String> for TimeZone {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> { Self::parse(&value) }
}

impl From<TimeZone> for String {
  fn from(tz: TimeZone) -> Self { tz.as_str().to_owned() }
}

// ─── Office ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
  pub office_id:  Uuid,
  pub name:       String,
  pub time_zone:  TimeZone,
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::OfficeRepository::add_office`].
/// `office_id` and `created_at` are always assigned by the store.
#[derive(Debug, Clone)]
pub struct NewOffice {
  pub name:      String,
  pub time_zone: TimeZone,
}
