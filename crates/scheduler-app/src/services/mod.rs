//! Office-scoped use cases.
//!
//! Every service owns an `Arc` of the store it was built with and checks the
//! office before any scoped read or write. Ids arrive as strings; one that is
//! not a UUID cannot name an existing entity and is reported as not found.

mod clients;
mod groups;
mod offices;
mod subjects;

use scheduler_core::store::SchedulerStore;
use uuid::Uuid;

pub use clients::ClientsService;
pub use groups::GroupsService;
pub use offices::OfficesService;
pub use subjects::SubjectsService;

use crate::{EntityKind, Error, Result};

fn parse_id(raw: &str, kind: EntityKind) -> Result<Uuid> {
  Uuid::parse_str(raw.trim()).map_err(|_| Error::NotFound(kind))
}

/// Resolve `office_id` to an existing office.
async fn require_office<S: SchedulerStore>(store: &S, office_id: &str) -> Result<Uuid> {
  let id = parse_id(office_id, EntityKind::Office)?;
  store
    .get_office(id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::NotFound(EntityKind::Office))?;
  Ok(id)
}
