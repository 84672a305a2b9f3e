//! Application layer: validated DTOs, public projections, and the services
//! that run the office-scoped use cases against any
//! [`scheduler_core::store::SchedulerStore`].
//!
//! Services are built with explicit constructor injection:
//!
//! ```rust,ignore
//! let store = Arc::new(SqliteStore::open("scheduler.db").await?);
//! let clients = ClientsService::new(store.clone());
//! let view = clients.create(&office_id, CreateClientDto { name: "Ann".into() }).await?;
//! ```

pub mod dto;
pub mod error;
pub mod services;

pub use error::{EntityKind, Error, Result};
pub use services::{ClientsService, GroupsService, OfficesService, SubjectsService};

#[cfg(test)]
mod test_support;
