use scheduler_core::{group::Group, NAME_MAX_LEN, NAME_MIN_LEN};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupDto {
  #[validate(length(min = NAME_MIN_LEN, max = NAME_MAX_LEN, message = "name length is out of bounds"))]
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
  pub id:   Uuid,
  pub name: String,
}

impl From<Group> for GroupView {
  fn from(g: Group) -> Self {
    Self {
      id:   g.group_id,
      name: g.name,
    }
  }
}
