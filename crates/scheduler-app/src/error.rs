//! Error type for the application services.

use strum::Display;
use thiserror::Error;

/// The entity a [`Error::NotFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntityKind {
  Office,
  Client,
  Group,
  Subject,
}

#[derive(Debug, Error)]
pub enum Error {
  /// The referenced office or entity does not exist (or lives in another
  /// office). Renders as e.g. `"Office not found"`.
  #[error("{0} not found")]
  NotFound(EntityKind),

  /// A field constraint was violated. No write has happened.
  #[error("validation failed: {0}")]
  Validation(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }

  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }

  pub fn is_validation(&self) -> bool { matches!(self, Self::Validation(_)) }
}

impl From<validator::ValidationErrors> for Error {
  fn from(errors: validator::ValidationErrors) -> Self {
    Self::Validation(errors.to_string())
  }
}

impl From<validator::ValidationError> for Error {
  fn from(error: validator::ValidationError) -> Self {
    Self::Validation(error.to_string())
  }
}

impl From<scheduler_core::Error> for Error {
  fn from(error: scheduler_core::Error) -> Self {
    Self::Validation(error.to_string())
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
