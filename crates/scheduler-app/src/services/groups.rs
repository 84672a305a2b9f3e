use std::sync::Arc;

use scheduler_core::{
  group::{Group, NewGroup},
  store::{SchedulerStore, ScopedRepository},
};
use validator::Validate;

use super::{parse_id, require_office};
use crate::{
  dto::{CreateGroupDto, GroupView},
  EntityKind, Error, Result,
};

/// Groups own subjects; they follow the same office scoping as clients.
pub struct GroupsService<S> {
  store: Arc<S>,
}

impl<S: SchedulerStore> GroupsService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn create(&self, office_id: &str, dto: CreateGroupDto) -> Result<GroupView> {
    dto.validate()?;
    let office_id = require_office(&*self.store, office_id).await?;

    let group = ScopedRepository::<Group>::insert(
      &*self.store,
      NewGroup { office_id, name: dto.name },
    )
    .await
    .map_err(Error::store)?;

    Ok(group.into())
  }

  pub async fn find_one(&self, office_id: &str, group_id: &str) -> Result<GroupView> {
    let office_id = require_office(&*self.store, office_id).await?;
    let group_id = parse_id(group_id, EntityKind::Group)?;

    ScopedRepository::<Group>::find_one(&*self.store, office_id, group_id)
      .await
      .map_err(Error::store)?
      .map(GroupView::from)
      .ok_or(Error::NotFound(EntityKind::Group))
  }

  pub async fn find_many(&self, office_id: &str) -> Result<Vec<GroupView>> {
    let office_id = require_office(&*self.store, office_id).await?;

    let groups = ScopedRepository::<Group>::find_all(&*self.store, office_id)
      .await
      .map_err(Error::store)?;
    Ok(groups.into_iter().map(GroupView::from).collect())
  }
}

impl<S> Clone for GroupsService<S> {
  fn clone(&self) -> Self { Self { store: self.store.clone() } }
}
