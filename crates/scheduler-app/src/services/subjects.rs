use std::sync::Arc;

use chrono::NaiveDate;
use scheduler_core::{
  group::Group,
  store::{SchedulerStore, ScopedRepository},
  subject::Subject,
};
use uuid::Uuid;
use validator::Validate;

use super::{parse_id, require_office};
use crate::{
  dto::{CreateSubjectDto, SubjectView},
  EntityKind, Error, Result,
};

pub struct SubjectsService<S> {
  store: Arc<S>,
}

impl<S: SchedulerStore> SubjectsService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Checks run in order: DTO fields, office, group within the office. The
  /// subject is written only once all of them pass.
  pub async fn create(&self, office_id: &str, dto: CreateSubjectDto) -> Result<SubjectView> {
    dto.validate()?;
    let office_id = require_office(&*self.store, office_id).await?;
    let group_id = self.require_group(office_id, &dto.group_id).await?;

    let input = dto.into_new_subject(office_id, group_id)?;
    let subject = ScopedRepository::<Subject>::insert(&*self.store, input)
      .await
      .map_err(Error::store)?;

    tracing::debug!(
      subject_id = %subject.subject_id,
      periodicity = subject.periodicity.discriminant(),
      "subject scheduled"
    );
    Ok(subject.into())
  }

  pub async fn find_one(&self, office_id: &str, subject_id: &str) -> Result<SubjectView> {
    let office_id = require_office(&*self.store, office_id).await?;
    let subject_id = parse_id(subject_id, EntityKind::Subject)?;

    ScopedRepository::<Subject>::find_one(&*self.store, office_id, subject_id)
      .await
      .map_err(Error::store)?
      .map(SubjectView::from)
      .ok_or(Error::NotFound(EntityKind::Subject))
  }

  pub async fn find_many(&self, office_id: &str) -> Result<Vec<SubjectView>> {
    let office_id = require_office(&*self.store, office_id).await?;
    Ok(self.all(office_id).await?.into_iter().map(SubjectView::from).collect())
  }

  /// Subjects of the office that fall on `date`, in creation order.
  pub async fn find_on(&self, office_id: &str, date: NaiveDate) -> Result<Vec<SubjectView>> {
    let office_id = require_office(&*self.store, office_id).await?;
    Ok(
      self
        .all(office_id)
        .await?
        .into_iter()
        .filter(|s| s.periodicity.occurs_on(date))
        .map(SubjectView::from)
        .collect(),
    )
  }

  pub async fn delete(&self, office_id: &str, subject_id: &str) -> Result<()> {
    let office_id = require_office(&*self.store, office_id).await?;
    let subject_id = parse_id(subject_id, EntityKind::Subject)?;

    let deleted = ScopedRepository::<Subject>::delete(&*self.store, office_id, subject_id)
      .await
      .map_err(Error::store)?;
    if !deleted {
      return Err(Error::NotFound(EntityKind::Subject));
    }
    Ok(())
  }

  async fn all(&self, office_id: Uuid) -> Result<Vec<Subject>> {
    ScopedRepository::<Subject>::find_all(&*self.store, office_id)
      .await
      .map_err(Error::store)
  }

  async fn require_group(&self, office_id: Uuid, group_id: &str) -> Result<Uuid> {
    let group_id = parse_id(group_id, EntityKind::Group)?;
    ScopedRepository::<Group>::find_one(&*self.store, office_id, group_id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(EntityKind::Group))?;
    Ok(group_id)
  }
}

impl<S> Clone for SubjectsService<S> {
  fn clone(&self) -> Self { Self { store: self.store.clone() } }
}
