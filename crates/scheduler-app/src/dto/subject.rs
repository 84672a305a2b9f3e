use scheduler_core::{
  periodicity::Periodicity,
  subject::{NewSubject, Subject},
  time_interval::TimeInterval,
  MAX_REQUIRED_TEACHERS, MIN_REQUIRED_TEACHERS, NAME_MAX_LEN, NAME_MIN_LEN,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{
  periodicity::{select_periodicity, validate_periodicity},
  TimeIntervalDto,
};

/// Input for creating a subject.
///
/// `periodicity` is kept as raw JSON so the `type` tag can be checked and the
/// matching sub-shape selected during validation (see
/// [`select_periodicity`]). A missing field deserialises as `null` and fails
/// validation rather than deserialisation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubjectDto {
  #[validate(length(min = NAME_MIN_LEN, max = NAME_MAX_LEN, message = "name length is out of bounds"))]
  pub name:              String,
  #[serde(default)]
  #[validate(custom(function = "validate_periodicity"))]
  pub periodicity:       serde_json::Value,
  #[validate(nested)]
  pub time:              TimeIntervalDto,
  #[validate(length(min = 1, message = "groupId is required"))]
  pub group_id:          String,
  #[validate(range(
    min = i64::from(MIN_REQUIRED_TEACHERS),
    max = i64::from(MAX_REQUIRED_TEACHERS),
    message = "requiredTeachers is out of bounds"
  ))]
  pub required_teachers: i64,
}

impl CreateSubjectDto {
  /// Build the store input. Call only after `validate()` has passed.
  pub(crate) fn into_new_subject(
    self,
    office_id: Uuid,
    group_id: Uuid,
  ) -> crate::Result<NewSubject> {
    let periodicity = select_periodicity(&self.periodicity)?;
    let time = self.time.to_interval()?;
    let required_teachers = u8::try_from(self.required_teachers).map_err(|_| {
      crate::Error::Validation(format!(
        "requiredTeachers out of range: {}",
        self.required_teachers
      ))
    })?;

    Ok(NewSubject {
      office_id,
      group_id,
      name: self.name,
      periodicity,
      time,
      required_teachers,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectView {
  pub id:                Uuid,
  pub name:              String,
  pub group_id:          Uuid,
  pub periodicity:       Periodicity,
  pub time:              TimeInterval,
  pub required_teachers: u8,
}

impl From<Subject> for SubjectView {
  fn from(s: Subject) -> Self {
    Self {
      id:                s.subject_id,
      name:              s.name,
      group_id:          s.group_id,
      periodicity:       s.periodicity,
      time:              s.time,
      required_teachers: s.required_teachers,
    }
  }
}
