use std::sync::Arc;

use scheduler_core::{
  office::{NewOffice, TimeZone},
  store::SchedulerStore,
};
use validator::Validate;

use super::parse_id;
use crate::{
  dto::{CreateOfficeDto, OfficeView},
  EntityKind, Error, Result,
};

pub struct OfficesService<S> {
  store: Arc<S>,
}

impl<S: SchedulerStore> OfficesService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn create(&self, dto: CreateOfficeDto) -> Result<OfficeView> {
    dto.validate()?;
    let time_zone = TimeZone::parse(&dto.time_zone)?;

    let office = self
      .store
      .add_office(NewOffice { name: dto.name, time_zone })
      .await
      .map_err(Error::store)?;

    tracing::debug!(office_id = %office.office_id, "office registered");
    Ok(office.into())
  }

  pub async fn find_one(&self, office_id: &str) -> Result<OfficeView> {
    let id = parse_id(office_id, EntityKind::Office)?;
    self
      .store
      .get_office(id)
      .await
      .map_err(Error::store)?
      .map(OfficeView::from)
      .ok_or(Error::NotFound(EntityKind::Office))
  }

  /// All offices in creation order.
  pub async fn find_many(&self) -> Result<Vec<OfficeView>> {
    let offices = self.store.list_offices().await.map_err(Error::store)?;
    Ok(offices.into_iter().map(OfficeView::from).collect())
  }
}

impl<S> Clone for OfficesService<S> {
  fn clone(&self) -> Self { Self { store: self.store.clone() } }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::store;

  fn dto(name: &str, time_zone: &str) -> CreateOfficeDto {
    CreateOfficeDto { name: name.into(), time_zone: time_zone.into() }
  }

  #[tokio::test]
  async fn create_then_find_one() {
    let offices = OfficesService::new(store().await);

    let created = offices.create(dto("Moscow", "Europe/Moscow")).await.unwrap();
    let found = offices.find_one(&created.id.to_string()).await.unwrap();

    assert_eq!(found, created);
    assert_eq!(found.time_zone.as_str(), "Europe/Moscow");
  }

  #[tokio::test]
  async fn malformed_time_zone_is_rejected() {
    let offices = OfficesService::new(store().await);

    for tz in ["", "Moscow", "Europe/", "Europe/Mos cow", "Europe/Narnia", "Foo/Bar"] {
      let err = offices.create(dto("Main", tz)).await.unwrap_err();
      assert!(err.is_validation(), "{tz:?} should be rejected, got {err}");
    }
    assert!(offices.find_many().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn single_segment_zones_are_accepted() {
    let offices = OfficesService::new(store().await);

    for tz in ["GMT", "Japan", "EST5EDT", "Singapore"] {
      let office = offices.create(dto("Main", tz)).await.unwrap();
      assert_eq!(office.time_zone.as_str(), tz);
    }
  }

  #[tokio::test]
  async fn unknown_office_is_not_found() {
    let offices = OfficesService::new(store().await);

    let err = offices.find_one("wrong-office-id").await.unwrap_err();
    assert_eq!(err.to_string(), "Office not found");

    let err = offices.find_one(&uuid::Uuid::new_v4().to_string()).await.unwrap_err();
    assert!(err.is_not_found());
  }

  #[tokio::test]
  async fn find_many_in_creation_order() {
    let offices = OfficesService::new(store().await);
    for name in ["North", "South", "East"] {
      offices.create(dto(name, "UTC")).await.unwrap();
    }

    let names: Vec<String> =
      offices.find_many().await.unwrap().into_iter().map(|o| o.name).collect();
    assert_eq!(names, ["North", "South", "East"]);
  }
}
