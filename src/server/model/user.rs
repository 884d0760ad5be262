//! User domain models and parameters.
//!
//! A user is a login identity with a role; the matching employee record (see
//! [`super::employee`]) carries the organizational data. The password hash never leaves
//! the repository layer except through [`UserCredentials`].

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use crate::{
    model::user::{UserDto, UserRole, UserStatus},
    server::model::parse_column,
};

pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Application user without credentials.
///
/// Serializable so it can be stored in the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub location: Option<String>,
    pub timezone: String,
    pub photo_url: Option<String>,
    pub status: UserStatus,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - Stored role or status is not a known value
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            role: parse_column(&entity.role)?,
            status: parse_column(&entity.status)?,
            id: entity.id,
            email: entity.email,
            full_name: entity.full_name,
            location: entity.location,
            timezone: entity.timezone,
            photo_url: entity.photo_url,
            email_verified_at: entity.email_verified_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            role: self.role,
            location: self.location,
            timezone: self.timezone,
            photo_url: self.photo_url,
            status: self.status,
            email_verified_at: self.email_verified_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A user together with the stored password hash, used only for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Parameters for creating a user together with its employee record.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    /// Already-hashed password.
    pub password_hash: String,
    pub full_name: String,
    pub role: UserRole,
    pub location: Option<String>,
    pub timezone: String,
    /// Department the new employee record is attached to.
    pub department_id: String,
}

/// Parameters for a partial user update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub id: String,
    pub email: Option<String>,
    /// Already-hashed replacement password.
    pub password_hash: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    pub photo_url: Option<String>,
}
