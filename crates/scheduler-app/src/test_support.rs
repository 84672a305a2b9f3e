//! Fixtures shared by the service tests.

use std::sync::Arc;

use scheduler_core::office::{NewOffice, Office, TimeZone};
use scheduler_core::store::OfficeRepository;
use scheduler_store_sqlite::SqliteStore;

pub async fn store() -> Arc<SqliteStore> {
  Arc::new(SqliteStore::open_in_memory().await.expect("in-memory store"))
}

pub async fn seed_office(store: &SqliteStore, name: &str) -> Office {
  store
    .add_office(NewOffice {
      name:      name.into(),
      time_zone: TimeZone::parse("Europe/Moscow").unwrap(),
    })
    .await
    .unwrap()
}
