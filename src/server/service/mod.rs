//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, ownership checks and status rules
//! - **Orchestration**: Coordinating multiple repositories, the cache and background tasks
//! - **Domain Models**: Working with domain models rather than entity models
//!
//! Services accept request DTOs where validation is part of the business rules and
//! return domain models; controllers convert those to response DTOs.

pub mod attendance;
pub mod auth;
pub mod department;
pub mod device;
pub mod leave;
pub mod monitoring;
pub mod notification;
pub mod schedule;
pub mod user;
pub mod work_location;

use std::str::FromStr;

use crate::server::error::AppError;

/// Parses a request value into one of the wire enumerations.
///
/// # Arguments
/// - `value` - Raw request value
///
/// # Returns
/// - `Ok(T)` - Parsed value
/// - `Err(AppError::BadRequest)` - Value is not a member of the enumeration
pub(crate) fn parse_enum<T>(value: &str) -> Result<T, AppError>
where
    T: FromStr<Err = String>,
{
    T::from_str(value).map_err(AppError::BadRequest)
}

/// Rejects blank required text fields.
pub(crate) fn require_text(value: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(message.to_string()));
    }
    Ok(())
}
