//! Work location domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::work_location::{
    CreateWorkLocationDto, UpdateWorkLocationDto, WorkLocationDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct WorkLocation {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkLocation {
    pub fn from_entity(entity: entity::work_location::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            city: entity.city,
            state: entity.state,
            country: entity.country,
            postal_code: entity.postal_code,
            timezone: entity.timezone,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> WorkLocationDto {
        WorkLocationDto {
            id: self.id,
            name: self.name,
            address: self.address,
            city: self.city,
            state: self.state,
            country: self.country,
            postal_code: self.postal_code,
            timezone: self.timezone,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateWorkLocationParams {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub timezone: String,
}

impl CreateWorkLocationParams {
    pub fn from_dto(dto: CreateWorkLocationDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            postal_code: dto.postal_code,
            timezone: dto
                .timezone
                .unwrap_or_else(|| super::user::DEFAULT_TIMEZONE.to_string()),
        }
    }
}

/// Partial work location update. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateWorkLocationParams {
    pub id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub timezone: Option<String>,
}

impl UpdateWorkLocationParams {
    pub fn from_dto(id: String, dto: UpdateWorkLocationDto) -> Self {
        Self {
            id,
            name: dto.name,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            postal_code: dto.postal_code,
            timezone: dto.timezone,
        }
    }
}
