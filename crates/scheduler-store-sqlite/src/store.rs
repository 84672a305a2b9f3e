//! The SQLite implementation of the repository traits.

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use scheduler_core::{
  office::{NewOffice, Office},
  store::{OfficeRepository, ScopedRepository, StoreBackend},
};
use uuid::Uuid;

use crate::{
  encode::{encode_dt, encode_uuid, RawOffice},
  schema::SCHEMA,
  table::Table,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A scheduler store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    tracing::debug!(path = %path.display(), "opening sqlite store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

fn placeholders(n: usize) -> String {
  (1..=n).map(|i| format!("?{i}")).collect::<Vec<_>>().join(", ")
}

// ─── Offices ─────────────────────────────────────────────────────────────────

impl StoreBackend for SqliteStore {
  type Error = crate::Error;
}

impl OfficeRepository for SqliteStore {
  async fn add_office(&self, input: NewOffice) -> Result<Office> {
    let office = Office {
      office_id:  Uuid::new_v4(),
      name:       input.name,
      time_zone:  input.time_zone,
      created_at: Utc::now(),
    };

    let id_str = encode_uuid(office.office_id);
    let name   = office.name.clone();
    let tz_str = office.time_zone.as_str().to_owned();
    let at_str = encode_dt(office.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO offices (office_id, name, time_zone, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, name, tz_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    tracing::debug!(office_id = %office.office_id, "office created");
    Ok(office)
  }

  async fn get_office(&self, office_id: Uuid) -> Result<Option<Office>> {
    let id_str = encode_uuid(office_id);

    let raw: Option<RawOffice> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT office_id, name, time_zone, created_at
               FROM offices WHERE office_id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawOffice {
                  office_id:  row.get(0)?,
                  name:       row.get(1)?,
                  time_zone:  row.get(2)?,
                  created_at: row.get(3)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawOffice::into_office).transpose()
  }

  async fn list_offices(&self) -> Result<Vec<Office>> {
    let raws: Vec<RawOffice> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT office_id, name, time_zone, created_at
           FROM offices ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawOffice {
              office_id:  row.get(0)?,
              name:       row.get(1)?,
              time_zone:  row.get(2)?,
              created_at: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawOffice::into_office).collect()
  }
}

// ─── Office-scoped entities ──────────────────────────────────────────────────

impl<E: Table> ScopedRepository<E> for SqliteStore {
  async fn insert(&self, input: E::New) -> Result<E> {
    let entity = E::build(input);
    let values = entity.encode()?;
    let sql = format!(
      "INSERT INTO {} ({}) VALUES ({})",
      E::TABLE,
      E::column_list(),
      placeholders(E::COLUMNS.len()),
    );

    self
      .conn
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params_from_iter(values))?;
        Ok(())
      })
      .await?;

    tracing::debug!(
      kind = E::KIND,
      id = %entity.id(),
      office_id = %entity.office_id(),
      "entity created"
    );
    Ok(entity)
  }

  async fn find_one(&self, office_id: Uuid, id: Uuid) -> Result<Option<E>> {
    let office_str = encode_uuid(office_id);
    let id_str     = encode_uuid(id);
    let sql = format!(
      "SELECT {} FROM {} WHERE office_id = ?1 AND {} = ?2",
      E::column_list(),
      E::TABLE,
      E::id_column(),
    );

    let raw: Option<E::Raw> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![office_str, id_str], |row| {
              E::read_row(row)
            })
            .optional()?,
        )
      })
      .await?;

    raw.map(E::decode).transpose()
  }

  async fn find_all(&self, office_id: Uuid) -> Result<Vec<E>> {
    let office_str = encode_uuid(office_id);
    let sql = format!(
      "SELECT {} FROM {} WHERE office_id = ?1 ORDER BY rowid",
      E::column_list(),
      E::TABLE,
    );

    let raws: Vec<E::Raw> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![office_str], |row| E::read_row(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(E::decode).collect()
  }

  async fn delete(&self, office_id: Uuid, id: Uuid) -> Result<bool> {
    let office_str = encode_uuid(office_id);
    let id_str     = encode_uuid(id);
    let sql = format!(
      "DELETE FROM {} WHERE office_id = ?1 AND {} = ?2",
      E::TABLE,
      E::id_column(),
    );

    let affected = self
      .conn
      .call(move |conn| Ok(conn.execute(&sql, rusqlite::params![office_str, id_str])?))
      .await?;

    if affected > 0 {
      tracing::debug!(kind = E::KIND, %id, %office_id, "entity deleted");
    }
    Ok(affected > 0)
  }
}
