//! Selection of the periodicity sub-shape from a raw JSON payload.
//!
//! The `type` tag picks exactly one of four shapes; the payload is then
//! deserialised into that shape's DTO and validated. Anything that does not
//! fit (non-object, missing or unknown tag, shape constraint) is a
//! [`ValidationError`], never a default.

use scheduler_core::periodicity::{DayOfWeek, Periodicity, PeriodicityKind, WeekParity};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use super::{flatten, invalid};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPeriodicityDto {
  #[validate(length(min = 1, message = "weekly periodicity needs at least one day"))]
  pub days: Vec<DayOfWeek>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BiWeeklyPeriodicityDto {
  #[validate(length(min = 1, message = "biweekly periodicity needs at least one day"))]
  pub days:   Vec<DayOfWeek>,
  pub parity: WeekParity,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPeriodicityDto {
  #[validate(range(
    min = i64::from(Periodicity::MIN_DAY_OF_MONTH),
    max = i64::from(Periodicity::MAX_DAY_OF_MONTH),
    message = "dayOfMonth is out of bounds"
  ))]
  pub day_of_month: i64,
}

/// Pick and validate the periodicity shape named by `raw["type"]`.
pub fn select_periodicity(raw: &Value) -> Result<Periodicity, ValidationError> {
  let object = raw
    .as_object()
    .ok_or_else(|| invalid("periodicity", "periodicity must be an object"))?;

  let tag = match object.get("type") {
    None | Some(Value::Null) => {
      return Err(invalid("periodicity_type", "periodicity type is required"));
    }
    Some(Value::String(tag)) => tag,
    Some(_) => {
      return Err(invalid("periodicity_type", "periodicity type must be a string"));
    }
  };

  let kind: PeriodicityKind = tag.parse().map_err(|_| {
    invalid("periodicity_type", format!("unknown periodicity type {tag:?}"))
  })?;

  let periodicity = match kind {
    PeriodicityKind::Daily => Ok(Periodicity::Daily),
    PeriodicityKind::Weekly => {
      let dto: WeeklyPeriodicityDto = shape(raw)?;
      Periodicity::weekly(dto.days)
    }
    PeriodicityKind::BiWeekly => {
      let dto: BiWeeklyPeriodicityDto = shape(raw)?;
      Periodicity::biweekly(dto.days, dto.parity)
    }
    PeriodicityKind::Monthly => {
      let dto: MonthlyPeriodicityDto = shape(raw)?;
      // Range already checked by `validate()`.
      Periodicity::monthly(dto.day_of_month as u8)
    }
  };

  periodicity.map_err(|e| invalid("periodicity", e.to_string()))
}

/// Deserialise `raw` into the selected shape and run its field validators.
fn shape<T>(raw: &Value) -> Result<T, ValidationError>
where
  T: DeserializeOwned + Validate,
{
  let dto: T = serde_json::from_value(raw.clone())
    .map_err(|e| invalid("periodicity", format!("malformed periodicity: {e}")))?;
  dto.validate().map_err(|e| flatten("periodicity", e))?;
  Ok(dto)
}

/// Field-level hook for `#[validate(custom(...))]`.
pub(super) fn validate_periodicity(raw: &Value) -> Result<(), ValidationError> {
  select_periodicity(raw).map(|_| ())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn message(err: ValidationError) -> String {
    err.message.map(|m| m.into_owned()).unwrap_or_default()
  }

  #[test]
  fn selects_each_shape() {
    assert_eq!(select_periodicity(&json!({ "type": "daily" })).unwrap(), Periodicity::Daily);

    assert_eq!(
      select_periodicity(&json!({ "type": "weekly", "days": [3, 1, 3] })).unwrap(),
      Periodicity::weekly([DayOfWeek::Monday, DayOfWeek::Wednesday]).unwrap()
    );

    assert_eq!(
      select_periodicity(&json!({ "type": "biweekly", "days": [5], "parity": "odd" }))
        .unwrap(),
      Periodicity::biweekly([DayOfWeek::Friday], WeekParity::Odd).unwrap()
    );

    assert_eq!(
      select_periodicity(&json!({ "type": "monthly", "dayOfMonth": 10 })).unwrap(),
      Periodicity::Monthly { day_of_month: 10 }
    );
  }

  #[test]
  fn missing_type_is_rejected() {
    let err = select_periodicity(&json!({ "days": [1] })).unwrap_err();
    assert_eq!(message(err), "periodicity type is required");
  }

  #[test]
  fn unknown_type_is_rejected() {
    let err = select_periodicity(&json!({ "type": "yearly" })).unwrap_err();
    assert!(message(err).contains("unknown periodicity type"));

    // The tag is case-sensitive.
    assert!(select_periodicity(&json!({ "type": "Weekly", "days": [1] })).is_err());
  }

  #[test]
  fn non_object_and_non_string_tag_are_rejected() {
    assert!(select_periodicity(&Value::Null).is_err());
    assert!(select_periodicity(&json!("daily")).is_err());
    assert!(select_periodicity(&json!({ "type": 1 })).is_err());
  }

  #[test]
  fn shape_constraints_are_enforced() {
    // Empty day set.
    assert!(select_periodicity(&json!({ "type": "weekly", "days": [] })).is_err());
    // Day outside 1..=7.
    assert!(select_periodicity(&json!({ "type": "weekly", "days": [0] })).is_err());
    assert!(select_periodicity(&json!({ "type": "weekly", "days": [8] })).is_err());
    // Missing parity.
    assert!(select_periodicity(&json!({ "type": "biweekly", "days": [1] })).is_err());
    // Day of month out of range or missing.
    assert!(select_periodicity(&json!({ "type": "monthly", "dayOfMonth": 0 })).is_err());
    assert!(select_periodicity(&json!({ "type": "monthly", "dayOfMonth": 32 })).is_err());
    assert!(select_periodicity(&json!({ "type": "monthly" })).is_err());
  }
}
