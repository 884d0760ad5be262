//! Attendance device service.
//!
//! Devices are the biometric and RFID terminals installed at work locations. Each
//! reported event becomes a device log and stamps the device's last check time.

use sea_orm::DatabaseConnection;

use crate::{
    model::device::{
        CreateDeviceDto, CreateDeviceLogDto, DeviceStatus, DeviceType, UpdateDeviceDto,
    },
    server::{
        data::device::DeviceRepository,
        error::AppError,
        model::device::{
            CreateDeviceLogParams, CreateDeviceParams, Device, DeviceLog, UpdateDeviceParams,
        },
        service::{parse_enum, require_text},
    },
};

pub struct DeviceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeviceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Device>, AppError> {
        Ok(DeviceRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Device, AppError> {
        DeviceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("device not found".to_string()))
    }

    /// Registers a device.
    ///
    /// # Arguments
    /// - `dto` - Name, type, location and optional status (defaults to active)
    ///
    /// # Returns
    /// - `Ok(Device)` - The created device
    /// - `Err(AppError::BadRequest)` - Blank name or unknown type or status
    pub async fn create(&self, dto: CreateDeviceDto) -> Result<Device, AppError> {
        require_text(&dto.name, "device name is required")?;

        let params = CreateDeviceParams {
            name: dto.name,
            device_type: parse_enum::<DeviceType>(&dto.device_type)?,
            location: dto.location,
            status: match dto.status.as_deref() {
                Some(status) => parse_enum(status)?,
                None => DeviceStatus::Active,
            },
        };

        Ok(DeviceRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: &str, dto: UpdateDeviceDto) -> Result<Device, AppError> {
        let params = UpdateDeviceParams {
            id: id.to_string(),
            name: dto.name,
            device_type: dto.device_type.as_deref().map(parse_enum).transpose()?,
            location: dto.location,
            status: dto.status.as_deref().map(parse_enum).transpose()?,
        };

        DeviceRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("device not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !DeviceRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("device not found".to_string()));
        }
        Ok(())
    }

    /// Records an event reported by a device and marks the device as seen.
    ///
    /// # Arguments
    /// - `device_id` - Reporting device
    /// - `dto` - Action, description and the employee involved, if any
    ///
    /// # Returns
    /// - `Ok(DeviceLog)` - The stored log entry
    /// - `Err(AppError::NotFound)` - No device with that ID
    pub async fn add_log(
        &self,
        device_id: &str,
        dto: CreateDeviceLogDto,
    ) -> Result<DeviceLog, AppError> {
        require_text(&dto.action, "device log action is required")?;

        let repo = DeviceRepository::new(self.db);
        if repo.find_by_id(device_id).await?.is_none() {
            return Err(AppError::NotFound("device not found".to_string()));
        }

        let log = repo
            .create_log(CreateDeviceLogParams {
                device_id: device_id.to_string(),
                employee_id: dto.employee_id,
                action: dto.action,
                description: dto.description,
            })
            .await?;
        repo.touch_last_check(device_id, log.created_at).await?;

        Ok(log)
    }

    /// Gets a device's logs, newest first.
    pub async fn get_logs(&self, device_id: &str) -> Result<Vec<DeviceLog>, AppError> {
        let repo = DeviceRepository::new(self.db);
        if repo.find_by_id(device_id).await?.is_none() {
            return Err(AppError::NotFound("device not found".to_string()));
        }

        Ok(repo.get_logs(device_id).await?)
    }
}
