//! Core types and trait definitions for the office-scoped scheduler.
//!
//! No database or validation-framework dependencies live here; the store and
//! application crates build on these types.

pub mod client;
pub mod error;
pub mod group;
pub mod office;
pub mod periodicity;
pub mod store;
pub mod subject;
pub mod time_interval;

pub use error::{Error, Result};

/// Inclusive bounds, in characters, on every human-readable name (office,
/// client, group, subject).
pub const NAME_MIN_LEN: u64 = 1;
pub const NAME_MAX_LEN: u64 = 100;

/// Inclusive bounds on [`subject::Subject::required_teachers`].
pub const MIN_REQUIRED_TEACHERS: u8 = 1;
pub const MAX_REQUIRED_TEACHERS: u8 = 3;
