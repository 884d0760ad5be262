//! Attendance device and device log domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::device::{DeviceDto, DeviceLogDto, DeviceStatus, DeviceType},
    server::model::parse_column,
};

/// A biometric or RFID terminal employees check in at.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub device_type: DeviceType,
    pub location: String,
    pub status: DeviceStatus,
    /// Time the device last reported in.
    pub last_check: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Device {
    pub fn from_entity(entity: entity::device::Model) -> Result<Self, DbErr> {
        Ok(Self {
            device_type: parse_column(&entity.device_type)?,
            status: parse_column(&entity.status)?,
            id: entity.id,
            name: entity.name,
            location: entity.location,
            last_check: entity.last_check,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> DeviceDto {
        DeviceDto {
            id: self.id,
            name: self.name,
            device_type: self.device_type,
            location: self.location,
            status: self.status,
            last_check: self.last_check,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceLog {
    pub id: String,
    pub device_id: String,
    pub employee_id: Option<String>,
    pub action: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl DeviceLog {
    pub fn from_entity(entity: entity::device_log::Model) -> Self {
        Self {
            id: entity.id,
            device_id: entity.device_id,
            employee_id: entity.employee_id,
            action: entity.action,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> DeviceLogDto {
        DeviceLogDto {
            id: self.id,
            device_id: self.device_id,
            employee_id: self.employee_id,
            action: self.action,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDeviceParams {
    pub name: String,
    pub device_type: DeviceType,
    pub location: String,
    pub status: DeviceStatus,
}

/// Partial device update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateDeviceParams {
    pub id: String,
    pub name: Option<String>,
    pub device_type: Option<DeviceType>,
    pub location: Option<String>,
    pub status: Option<DeviceStatus>,
}

#[derive(Debug, Clone)]
pub struct CreateDeviceLogParams {
    pub device_id: String,
    pub employee_id: Option<String>,
    pub action: String,
    pub description: String,
}
