//! Subject: a recurring schedulable lesson or class.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  periodicity::Periodicity, store::ScopedEntity, time_interval::TimeInterval,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
  pub subject_id:        Uuid,
  pub office_id:         Uuid,
  pub group_id:          Uuid,
  pub name:              String,
  pub periodicity:       Periodicity,
  pub time:              TimeInterval,
  /// Always within
  /// [`MIN_REQUIRED_TEACHERS`](crate::MIN_REQUIRED_TEACHERS)..=[`MAX_REQUIRED_TEACHERS`](crate::MAX_REQUIRED_TEACHERS).
  pub required_teachers: u8,
  pub created_at:        DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSubject {
  pub office_id:         Uuid,
  pub group_id:          Uuid,
  pub name:              String,
  pub periodicity:       Periodicity,
  pub time:              TimeInterval,
  pub required_teachers: u8,
}

impl ScopedEntity for Subject {
  type New = NewSubject;

  const KIND: &'static str = "subject";

  fn id(&self) -> Uuid { self.subject_id }

  fn office_id(&self) -> Uuid { self.office_id }
}
