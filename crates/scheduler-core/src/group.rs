//! Group: an office-scoped cohort that owns subjects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::ScopedEntity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
  pub group_id:   Uuid,
  pub office_id:  Uuid,
  pub name:       String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGroup {
  pub office_id: Uuid,
  pub name:      String,
}

impl ScopedEntity for Group {
  type New = NewGroup;

  const KIND: &'static str = "group";

  fn id(&self) -> Uuid { self.group_id }

  fn office_id(&self) -> Uuid { self.office_id }
}
