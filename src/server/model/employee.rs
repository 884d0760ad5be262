//! Employee domain model.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{model::user::UserStatus, server::model::parse_column};

/// Organizational record attached one-to-one to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    pub user_id: String,
    pub department_id: Option<String>,
    pub name: String,
    pub location: Option<String>,
    pub timezone: String,
    pub photo_url: Option<String>,
    pub status: UserStatus,
    pub join_date: NaiveDate,
    pub reporting_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn from_entity(entity: entity::employee::Model) -> Result<Self, DbErr> {
        Ok(Self {
            status: parse_column(&entity.status)?,
            id: entity.id,
            user_id: entity.user_id,
            department_id: entity.department_id,
            name: entity.name,
            location: entity.location,
            timezone: entity.timezone,
            photo_url: entity.photo_url,
            join_date: entity.join_date,
            reporting_to: entity.reporting_to,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}
