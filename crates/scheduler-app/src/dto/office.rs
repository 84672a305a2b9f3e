use chrono::{DateTime, Utc};
use scheduler_core::{
  office::{Office, TimeZone},
  NAME_MAX_LEN, NAME_MIN_LEN,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::invalid;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfficeDto {
  #[validate(length(min = NAME_MIN_LEN, max = NAME_MAX_LEN, message = "name length is out of bounds"))]
  pub name:      String,
  /// IANA zone name, e.g. `Europe/Moscow`.
  #[validate(custom(function = "validate_time_zone"))]
  pub time_zone: String,
}

fn validate_time_zone(name: &str) -> Result<(), ValidationError> {
  TimeZone::parse(name)
    .map(|_| ())
    .map_err(|e| invalid("time_zone", e.to_string()))
}

/// Offices are the tenancy root, so their projection includes the zone and
/// creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeView {
  pub id:         Uuid,
  pub name:       String,
  pub time_zone:  TimeZone,
  pub created_at: DateTime<Utc>,
}

impl From<Office> for OfficeView {
  fn from(o: Office) -> Self {
    Self {
      id:         o.office_id,
      name:       o.name,
      time_zone:  o.time_zone,
      created_at: o.created_at,
    }
  }
}
