//! Data-transfer objects accepted by the services, and the projections they
//! return.
//!
//! Input DTOs derive [`validator::Validate`]; every service calls
//! `validate()` before touching the store. Projections (`*View`) carry only
//! public fields: the owning office id and internal timestamps are never
//! echoed back for office-scoped entities.

mod client;
mod group;
mod office;
mod periodicity;
mod subject;
mod time_interval;

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

pub use client::{ClientView, CreateClientDto};
pub use group::{CreateGroupDto, GroupView};
pub use office::{CreateOfficeDto, OfficeView};
pub use periodicity::{
  select_periodicity, BiWeeklyPeriodicityDto, MonthlyPeriodicityDto, WeeklyPeriodicityDto,
};
pub use subject::{CreateSubjectDto, SubjectView};
pub use time_interval::TimeIntervalDto;

fn invalid(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
  let mut error = ValidationError::new(code);
  error.message = Some(message.into());
  error
}

/// Collapse the errors of a nested DTO into the single error a custom field
/// validator returns.
fn flatten(code: &'static str, errors: ValidationErrors) -> ValidationError {
  invalid(code, errors.to_string())
}
