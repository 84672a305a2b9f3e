//! Repository traits implemented by storage backends.
//!
//! The traits are implemented by storage backends (e.g.
//! `scheduler-store-sqlite`). The application services depend on this
//! abstraction, not on any concrete backend.
//!
//! Every office-scoped read and write takes the office id as an explicit
//! parameter. A backend must never return an entity whose `office_id`
//! differs from the one asked for.

use std::future::Future;

use uuid::Uuid;

use crate::office::{NewOffice, Office};

// ─── Entities ────────────────────────────────────────────────────────────────

/// An entity that lives inside exactly one office.
pub trait ScopedEntity: Clone + Send + Sync + 'static {
  /// Store input for creating the entity. Ids and timestamps are assigned by
  /// the store, never accepted from callers.
  type New: Send + 'static;

  /// Lower-case entity name used in logs and error messages.
  const KIND: &'static str;

  fn id(&self) -> Uuid;

  fn office_id(&self) -> Uuid;
}

// ─── Traits ──────────────────────────────────────────────────────────────────

/// The backend half shared by all repositories: one error type per store.
pub trait StoreBackend: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;
}

/// Offices are the tenancy root, so they are not office-scoped themselves.
pub trait OfficeRepository: StoreBackend {
  /// Create and persist a new office.
  fn add_office(
    &self,
    input: NewOffice,
  ) -> impl Future<Output = Result<Office, Self::Error>> + Send + '_;

  /// Retrieve an office by UUID. Returns `None` if not found.
  fn get_office(
    &self,
    office_id: Uuid,
  ) -> impl Future<Output = Result<Option<Office>, Self::Error>> + Send + '_;

  /// List all offices in creation order.
  fn list_offices(
    &self,
  ) -> impl Future<Output = Result<Vec<Office>, Self::Error>> + Send + '_;
}

/// A narrow, office-scoped repository for one entity type.
///
/// Callers are expected to have checked that the office exists; a backend
/// may additionally reject the write through a foreign-key constraint.
pub trait ScopedRepository<E: ScopedEntity>: StoreBackend {
  /// Persist a new entity (one durable write) and return it.
  fn insert(
    &self,
    input: E::New,
  ) -> impl Future<Output = Result<E, Self::Error>> + Send + '_;

  /// Retrieve one entity of `office_id`. Returns `None` if the entity does not
  /// exist or belongs to another office.
  fn find_one(
    &self,
    office_id: Uuid,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<E>, Self::Error>> + Send + '_;

  /// All entities of `office_id`, in insertion order.
  fn find_all(
    &self,
    office_id: Uuid,
  ) -> impl Future<Output = Result<Vec<E>, Self::Error>> + Send + '_;

  /// Delete one entity of `office_id`. Returns `false` if nothing matched.
  fn delete(
    &self,
    office_id: Uuid,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}

/// Everything the application services need from a backend.
pub trait SchedulerStore:
  OfficeRepository
  + ScopedRepository<crate::client::Client>
  + ScopedRepository<crate::group::Group>
  + ScopedRepository<crate::subject::Subject>
{
}

impl<T> SchedulerStore for T where
  T: OfficeRepository
    + ScopedRepository<crate::client::Client>
    + ScopedRepository<crate::group::Group>
    + ScopedRepository<crate::subject::Subject>
{
}
