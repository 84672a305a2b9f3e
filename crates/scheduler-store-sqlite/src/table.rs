//! Per-entity table mapping used by the generic [`ScopedRepository`] impl.
//!
//! [`ScopedRepository`]: scheduler_core::store::ScopedRepository

use chrono::Utc;
use rusqlite::types::Value;
use scheduler_core::{
  client::{Client, NewClient},
  group::{Group, NewGroup},
  store::ScopedEntity,
  subject::{NewSubject, Subject},
};
use uuid::Uuid;

use crate::{
  encode::{
    encode_dt, encode_periodicity, encode_time, encode_uuid, RawClient, RawGroup,
    RawSubject,
  },
  Result,
};

/// How an office-scoped entity maps onto one SQLite table.
///
/// `COLUMNS` lists every column in the order `encode` produces values and
/// `read_row` consumes them. The id column comes first and the table always
/// carries an `office_id` column.
pub trait Table: ScopedEntity {
  const TABLE: &'static str;
  const COLUMNS: &'static [&'static str];

  type Raw: Send + 'static;

  /// Assign the store-owned fields (id, `created_at`) to a new entity.
  fn build(input: Self::New) -> Self;

  fn encode(&self) -> Result<Vec<Value>>;

  fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self::Raw>;

  fn decode(raw: Self::Raw) -> Result<Self>;

  fn id_column() -> &'static str { Self::COLUMNS[0] }

  fn column_list() -> String { Self::COLUMNS.join(", ") }
}

// ─── Client ──────────────────────────────────────────────────────────────────

impl Table for Client {
  const TABLE: &'static str = "clients";
  const COLUMNS: &'static [&'static str] =
    &["client_id", "office_id", "name", "created_at"];

  type Raw = RawClient;

  fn build(input: NewClient) -> Self {
    Client {
      client_id:  Uuid::new_v4(),
      office_id:  input.office_id,
      name:       input.name,
      created_at: Utc::now(),
    }
  }

  fn encode(&self) -> Result<Vec<Value>> {
    Ok(vec![
      Value::Text(encode_uuid(self.client_id)),
      Value::Text(encode_uuid(self.office_id)),
      Value::Text(self.name.clone()),
      Value::Text(encode_dt(self.created_at)),
    ])
  }

  fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawClient> {
    Ok(RawClient {
      client_id:  row.get(0)?,
      office_id:  row.get(1)?,
      name:       row.get(2)?,
      created_at: row.get(3)?,
    })
  }

  fn decode(raw: RawClient) -> Result<Self> { raw.into_client() }
}

// ─── Group ───────────────────────────────────────────────────────────────────

impl Table for Group {
  const TABLE: &'static str = "office_groups";
  const COLUMNS: &'static [&'static str] =
    &["group_id", "office_id", "name", "created_at"];

  type Raw = RawGroup;

  fn build(input: NewGroup) -> Self {
    Group {
      group_id:   Uuid::new_v4(),
      office_id:  input.office_id,
      name:       input.name,
      created_at: Utc::now(),
    }
  }

  fn encode(&self) -> Result<Vec<Value>> {
    Ok(vec![
      Value::Text(encode_uuid(self.group_id)),
      Value::Text(encode_uuid(self.office_id)),
      Value::Text(self.name.clone()),
      Value::Text(encode_dt(self.created_at)),
    ])
  }

  fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawGroup> {
    Ok(RawGroup {
      group_id:   row.get(0)?,
      office_id:  row.get(1)?,
      name:       row.get(2)?,
      created_at: row.get(3)?,
    })
  }

  fn decode(raw: RawGroup) -> Result<Self> { raw.into_group() }
}

// ─── Subject ─────────────────────────────────────────────────────────────────

impl Table for Subject {
  const TABLE: &'static str = "subjects";
  const COLUMNS: &'static [&'static str] = &[
    "subject_id",
    "office_id",
    "group_id",
    "name",
    "periodicity_type",
    "periodicity_json",
    "time_start",
    "time_end",
    "required_teachers",
    "created_at",
  ];

  type Raw = RawSubject;

  fn build(input: NewSubject) -> Self {
    Subject {
      subject_id:        Uuid::new_v4(),
      office_id:         input.office_id,
      group_id:          input.group_id,
      name:              input.name,
      periodicity:       input.periodicity,
      time:              input.time,
      required_teachers: input.required_teachers,
      created_at:        Utc::now(),
    }
  }

  fn encode(&self) -> Result<Vec<Value>> {
    Ok(vec![
      Value::Text(encode_uuid(self.subject_id)),
      Value::Text(encode_uuid(self.office_id)),
      Value::Text(encode_uuid(self.group_id)),
      Value::Text(self.name.clone()),
      Value::Text(self.periodicity.discriminant().to_owned()),
      Value::Text(encode_periodicity(&self.periodicity)?),
      Value::Text(encode_time(self.time.start())),
      Value::Text(encode_time(self.time.end())),
      Value::Integer(i64::from(self.required_teachers)),
      Value::Text(encode_dt(self.created_at)),
    ])
  }

  fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawSubject> {
    Ok(RawSubject {
      subject_id:        row.get(0)?,
      office_id:         row.get(1)?,
      group_id:          row.get(2)?,
      name:              row.get(3)?,
      periodicity_type:  row.get(4)?,
      periodicity_json:  row.get(5)?,
      time_start:        row.get(6)?,
      time_end:          row.get(7)?,
      required_teachers: row.get(8)?,
      created_at:        row.get(9)?,
    })
  }

  fn decode(raw: RawSubject) -> Result<Self> { raw.into_subject() }
}
