//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Enumerated columns are stored as strings and parsed into typed enums during that
//! conversion, so an unknown stored value surfaces as a database error instead of
//! leaking into business logic.

pub mod actor;
pub mod attendance;
pub mod auth;
pub mod department;
pub mod device;
pub mod employee;
pub mod leave;
pub mod monitoring;
pub mod notification;
pub mod page;
pub mod schedule;
pub mod user;
pub mod work_location;

use sea_orm::DbErr;
use std::str::FromStr;

/// Parses a stored enumeration column into its typed representation.
///
/// # Arguments
/// - `value` - Raw column value
///
/// # Returns
/// - `Ok(T)` - Parsed value
/// - `Err(DbErr::Custom)` - Column holds a value the enum does not know
pub(crate) fn parse_column<T>(value: &str) -> Result<T, DbErr>
where
    T: FromStr<Err = String>,
{
    T::from_str(value).map_err(|e| DbErr::Custom(format!("stored value rejected: {}", e)))
}
