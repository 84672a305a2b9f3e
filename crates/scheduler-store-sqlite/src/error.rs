//! Error type for `scheduler-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] scheduler_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A stored row violates an invariant the domain types enforce.
  #[error("corrupt {table} row: {message}")]
  Corrupt {
    table:   &'static str,
    message: String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
