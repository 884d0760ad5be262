//! Department domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto};

/// Department employees are attached to by default when none is given at registration.
pub const DEFAULT_DEPARTMENT: &str = "Information Technology";

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub location: String,
    pub timezone: String,
    /// Free-form work-from-anywhere policy document.
    pub wfa_policy: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Department {
    pub fn from_entity(entity: entity::department::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            timezone: entity.timezone,
            wfa_policy: entity.wfa_policy,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DepartmentDto {
        DepartmentDto {
            id: self.id,
            name: self.name,
            location: self.location,
            timezone: self.timezone,
            wfa_policy: self.wfa_policy,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDepartmentParams {
    pub name: String,
    pub location: String,
    pub timezone: String,
    pub wfa_policy: Option<serde_json::Value>,
}

impl CreateDepartmentParams {
    pub fn from_dto(dto: CreateDepartmentDto) -> Self {
        Self {
            name: dto.name,
            location: dto.location,
            timezone: dto
                .timezone
                .unwrap_or_else(|| super::user::DEFAULT_TIMEZONE.to_string()),
            wfa_policy: dto.wfa_policy,
        }
    }
}

/// Partial department update. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateDepartmentParams {
    pub id: String,
    pub name: Option<String>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    pub wfa_policy: Option<serde_json::Value>,
}

impl UpdateDepartmentParams {
    pub fn from_dto(id: String, dto: UpdateDepartmentDto) -> Self {
        Self {
            id,
            name: dto.name,
            location: dto.location,
            timezone: dto.timezone,
            wfa_policy: dto.wfa_policy,
        }
    }
}
