//! Device factory for creating attendance devices and their logs.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test devices with customizable fields.
pub struct DeviceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    device_type: String,
    status: String,
}

impl<'a> DeviceFactory<'a> {
    /// Creates a new DeviceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Device {id}"` where id is auto-incremented
    /// - device_type: `"biometric"`
    /// - status: `"active"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Device {}", next_id()),
            device_type: "biometric".to_string(),
            status: "active".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = device_type.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::device::Model, DbErr> {
        let now = Utc::now();
        entity::device::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            name: ActiveValue::Set(self.name),
            device_type: ActiveValue::Set(self.device_type),
            location: ActiveValue::Set("Lobby".to_string()),
            status: ActiveValue::Set(self.status),
            last_check: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active biometric device.
pub async fn create_device(db: &DatabaseConnection) -> Result<entity::device::Model, DbErr> {
    DeviceFactory::new(db).build().await
}

/// Creates a log entry for a device.
///
/// # Arguments
/// - `db` - Database connection
/// - `device_id` - ID of the device the entry belongs to
/// - `action` - Logged action such as `"status_change"`
///
/// # Returns
/// - `Ok(entity::device_log::Model)` - Created log entry
/// - `Err(DbErr)` - Database error during insert
pub async fn create_device_log(
    db: &DatabaseConnection,
    device_id: &str,
    action: &str,
) -> Result<entity::device_log::Model, DbErr> {
    entity::device_log::ActiveModel {
        id: ActiveValue::Set(new_uuid()),
        device_id: ActiveValue::Set(device_id.to_string()),
        employee_id: ActiveValue::Set(None),
        action: ActiveValue::Set(action.to_string()),
        description: ActiveValue::Set(format!("{} recorded", action)),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
