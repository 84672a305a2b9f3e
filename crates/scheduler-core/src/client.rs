//! Client: a customer of an office.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::ScopedEntity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
  pub client_id:  Uuid,
  pub office_id:  Uuid,
  pub name:       String,
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::ScopedRepository::insert`] for clients.
#[derive(Debug, Clone)]
pub struct NewClient {
  pub office_id: Uuid,
  pub name:      String,
}

impl ScopedEntity for Client {
  type New = NewClient;

  const KIND: &'static str = "client";

  fn id(&self) -> Uuid { self.client_id }

  fn office_id(&self) -> Uuid { self.office_id }
}
