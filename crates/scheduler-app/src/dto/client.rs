use scheduler_core::{client::Client, NAME_MAX_LEN, NAME_MIN_LEN};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientDto {
  #[validate(length(min = NAME_MIN_LEN, max = NAME_MAX_LEN, message = "name length is out of bounds"))]
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientView {
  pub id:   Uuid,
  pub name: String,
}

impl From<Client> for ClientView {
  fn from(c: Client) -> Self {
    Self {
      id:   c.client_id,
      name: c.name,
    }
  }
}
