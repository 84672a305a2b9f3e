use std::sync::Arc;

use scheduler_core::{
  client::{Client, NewClient},
  store::{SchedulerStore, ScopedRepository},
};
use validator::Validate;

use super::{parse_id, require_office};
use crate::{
  dto::{ClientView, CreateClientDto},
  EntityKind, Error, Result,
};

pub struct ClientsService<S> {
  store: Arc<S>,
}

impl<S: SchedulerStore> ClientsService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn create(&self, office_id: &str, dto: CreateClientDto) -> Result<ClientView> {
    dto.validate()?;
    let office_id = require_office(&*self.store, office_id).await?;

    let client = ScopedRepository::<Client>::insert(
      &*self.store,
      NewClient { office_id, name: dto.name },
    )
    .await
    .map_err(Error::store)?;

    Ok(client.into())
  }

  pub async fn find_one(&self, office_id: &str, client_id: &str) -> Result<ClientView> {
    let office_id = require_office(&*self.store, office_id).await?;
    let client_id = parse_id(client_id, EntityKind::Client)?;

    ScopedRepository::<Client>::find_one(&*self.store, office_id, client_id)
      .await
      .map_err(Error::store)?
      .map(ClientView::from)
      .ok_or(Error::NotFound(EntityKind::Client))
  }

  pub async fn find_many(&self, office_id: &str) -> Result<Vec<ClientView>> {
    let office_id = require_office(&*self.store, office_id).await?;

    let clients = ScopedRepository::<Client>::find_all(&*self.store, office_id)
      .await
      .map_err(Error::store)?;
    Ok(clients.into_iter().map(ClientView::from).collect())
  }

  pub async fn delete(&self, office_id: &str, client_id: &str) -> Result<()> {
    let office_id = require_office(&*self.store, office_id).await?;
    let client_id = parse_id(client_id, EntityKind::Client)?;

    let deleted = ScopedRepository::<Client>::delete(&*self.store, office_id, client_id)
      .await
      .map_err(Error::store)?;
    if !deleted {
      return Err(Error::NotFound(EntityKind::Client));
    }
    Ok(())
  }
}

impl<S> Clone for ClientsService<S> {
  fn clone(&self) -> Self { Self { store: self.store.clone() } }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{seed_office, store};

  fn dto(name: impl Into<String>) -> CreateClientDto {
    CreateClientDto { name: name.into() }
  }

  #[tokio::test]
  async fn create_then_find_one_returns_same_view() {
    let store = store().await;
    let office = seed_office(&store, "Test Office").await.office_id.to_string();
    let clients = ClientsService::new(store);

    let created = clients.create(&office, dto("Test Client")).await.unwrap();
    let found = clients.find_one(&office, &created.id.to_string()).await.unwrap();

    assert_eq!(found, created);
    assert_eq!(found.name, "Test Client");
  }

  #[tokio::test]
  async fn create_under_unknown_office_fails() {
    let clients = ClientsService::new(store().await);

    let err = clients.create("wrong-office-id", dto("Test Client")).await.unwrap_err();
    assert_eq!(err.to_string(), "Office not found");

    let missing = uuid::Uuid::new_v4().to_string();
    let err = clients.create(&missing, dto("Test Client")).await.unwrap_err();
    assert_eq!(err.to_string(), "Office not found");
  }

  #[tokio::test]
  async fn find_many_returns_only_the_office_clients_in_order() {
    let store = store().await;
    let a = seed_office(&store, "Office A").await.office_id.to_string();
    let b = seed_office(&store, "Office B").await.office_id.to_string();
    let clients = ClientsService::new(store);

    let c11 = clients.create(&a, dto("Client 11")).await.unwrap();
    let c12 = clients.create(&a, dto("Client 12")).await.unwrap();
    clients.create(&b, dto("Client 21")).await.unwrap();

    assert_eq!(clients.find_many(&a).await.unwrap(), vec![c11, c12]);
  }

  #[tokio::test]
  async fn find_many_of_unknown_office_is_not_found() {
    let clients = ClientsService::new(store().await);
    let err = clients.find_many(&uuid::Uuid::new_v4().to_string()).await.unwrap_err();
    assert!(err.is_not_found());
  }

  #[tokio::test]
  async fn client_of_another_office_is_not_found() {
    let store = store().await;
    let a = seed_office(&store, "Office A").await.office_id.to_string();
    let b = seed_office(&store, "Office B").await.office_id.to_string();
    let clients = ClientsService::new(store);

    let c = clients.create(&a, dto("Client 11")).await.unwrap();
    let err = clients.find_one(&b, &c.id.to_string()).await.unwrap_err();
    assert_eq!(err.to_string(), "Client not found");
  }

  #[tokio::test]
  async fn name_length_is_enforced_before_writing() {
    let store = store().await;
    let office = seed_office(&store, "Test Office").await.office_id.to_string();
    let clients = ClientsService::new(store);

    assert!(clients.create(&office, dto("")).await.unwrap_err().is_validation());
    assert!(clients.create(&office, dto("x".repeat(101))).await.unwrap_err().is_validation());
    assert!(clients.find_many(&office).await.unwrap().is_empty());

    clients.create(&office, dto("x".repeat(100))).await.unwrap();
  }

  #[tokio::test]
  async fn deleted_client_is_no_longer_found() {
    let store = store().await;
    let office = seed_office(&store, "Test Office").await.office_id.to_string();
    let clients = ClientsService::new(store);

    let c = clients.create(&office, dto("Leaving")).await.unwrap();
    let id = c.id.to_string();

    clients.delete(&office, &id).await.unwrap();
    assert!(clients.find_one(&office, &id).await.unwrap_err().is_not_found());
    assert!(clients.delete(&office, &id).await.unwrap_err().is_not_found());
  }
}
