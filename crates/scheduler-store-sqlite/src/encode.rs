//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings, times of day as `HH:MM:SS`.
//! The periodicity is stored as its full tagged JSON next to a plain
//! discriminant column. UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, NaiveTime, Utc};
use scheduler_core::{
  client::Client,
  group::Group,
  office::{Office, TimeZone},
  periodicity::Periodicity,
  subject::Subject,
  time_interval::TimeInterval,
  MAX_REQUIRED_TEACHERS, MIN_REQUIRED_TEACHERS,
};
use uuid::Uuid;

use crate::{Error, Result};

const TIME_FORMAT: &str = "%H:%M:%S";

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveTime ───────────────────────────────────────────────────────────────

pub fn encode_time(t: NaiveTime) -> String { t.format(TIME_FORMAT).to_string() }

pub fn decode_time(s: &str) -> Result<NaiveTime> {
  NaiveTime::parse_from_str(s, TIME_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Periodicity ─────────────────────────────────────────────────────────────

pub fn encode_periodicity(p: &Periodicity) -> Result<String> {
  Ok(serde_json::to_string(p)?)
}

pub fn decode_periodicity(discriminant: &str, json: &str) -> Result<Periodicity> {
  let periodicity: Periodicity = serde_json::from_str(json)?;
  if periodicity.discriminant() != discriminant {
    return Err(Error::Corrupt {
      table:   "subjects",
      message: format!(
        "periodicity_type {discriminant:?} does not match payload type {:?}",
        periodicity.discriminant()
      ),
    });
  }
  periodicity.check()?;
  Ok(periodicity)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from an `offices` row.
pub struct RawOffice {
  pub office_id:  String,
  pub name:       String,
  pub time_zone:  String,
  pub created_at: String,
}

impl RawOffice {
  pub fn into_office(self) -> Result<Office> {
    Ok(Office {
      office_id:  decode_uuid(&self.office_id)?,
      name:       self.name,
      time_zone:  TimeZone::parse(&self.time_zone)?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `clients` row.
pub struct RawClient {
  pub client_id:  String,
  pub office_id:  String,
  pub name:       String,
  pub created_at: String,
}

impl RawClient {
  pub fn into_client(self) -> Result<Client> {
    Ok(Client {
      client_id:  decode_uuid(&self.client_id)?,
      office_id:  decode_uuid(&self.office_id)?,
      name:       self.name,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from an `office_groups` row.
pub struct RawGroup {
  pub group_id:   String,
  pub office_id:  String,
  pub name:       String,
  pub created_at: String,
}

impl RawGroup {
  pub fn into_group(self) -> Result<Group> {
    Ok(Group {
      group_id:   decode_uuid(&self.group_id)?,
      office_id:  decode_uuid(&self.office_id)?,
      name:       self.name,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read directly from a `subjects` row.
pub struct RawSubject {
  pub subject_id:        String,
  pub office_id:         String,
  pub group_id:          String,
  pub name:              String,
  pub periodicity_type:  String,
  pub periodicity_json:  String,
  pub time_start:        String,
  pub time_end:          String,
  pub required_teachers: i64,
  pub created_at:        String,
}

impl RawSubject {
  pub fn into_subject(self) -> Result<Subject> {
    let required_teachers = u8::try_from(self.required_teachers)
      .ok()
      .filter(|n| (MIN_REQUIRED_TEACHERS..=MAX_REQUIRED_TEACHERS).contains(n))
      .ok_or_else(|| Error::Corrupt {
        table:   "subjects",
        message: format!("required_teachers out of range: {}", self.required_teachers),
      })?;

    let time = TimeInterval::new(
      decode_time(&self.time_start)?,
      decode_time(&self.time_end)?,
    )?;

    Ok(Subject {
      subject_id: decode_uuid(&self.subject_id)?,
      office_id: decode_uuid(&self.office_id)?,
      group_id: decode_uuid(&self.group_id)?,
      name: self.name,
      periodicity: decode_periodicity(&self.periodicity_type, &self.periodicity_json)?,
      time,
      required_teachers,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
