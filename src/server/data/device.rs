//! Attendance device and device log data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::new_id,
    model::device::{
        CreateDeviceLogParams, CreateDeviceParams, Device, DeviceLog, UpdateDeviceParams,
    },
};

pub struct DeviceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeviceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateDeviceParams) -> Result<Device, DbErr> {
        let now = Utc::now();
        let entity = entity::device::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(params.name),
            device_type: ActiveValue::Set(params.device_type.as_str().to_string()),
            location: ActiveValue::Set(params.location),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            last_check: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Device::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Device>, DbErr> {
        entity::prelude::Device::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Device::from_entity)
            .transpose()
    }

    /// Gets every device ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Device>, DbErr> {
        entity::prelude::Device::find()
            .order_by_asc(entity::device::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Device::from_entity)
            .collect()
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Device))` - The updated device
    /// - `Ok(None)` - No device with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdateDeviceParams) -> Result<Option<Device>, DbErr> {
        let Some(entity) = entity::prelude::Device::find_by_id(params.id.clone())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::device::ActiveModel = entity.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(device_type) = params.device_type {
            active.device_type = ActiveValue::Set(device_type.as_str().to_string());
        }
        if let Some(location) = params.location {
            active.location = ActiveValue::Set(location);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Device::from_entity(updated)?))
    }

    /// Stamps the time a device last reported in.
    pub async fn touch_last_check(&self, id: &str, at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::Device::update_many()
            .filter(entity::device::Column::Id.eq(id))
            .col_expr(
                entity::device::Column::LastCheck,
                sea_orm::sea_query::Expr::value(at),
            )
            .col_expr(
                entity::device::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(at),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a device. Its logs are removed by the foreign key cascade.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Device::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn create_log(&self, params: CreateDeviceLogParams) -> Result<DeviceLog, DbErr> {
        let entity = entity::device_log::ActiveModel {
            id: ActiveValue::Set(new_id()),
            device_id: ActiveValue::Set(params.device_id),
            employee_id: ActiveValue::Set(params.employee_id),
            action: ActiveValue::Set(params.action),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(DeviceLog::from_entity(entity))
    }

    /// Gets a device's logs, newest first.
    pub async fn get_logs(&self, device_id: &str) -> Result<Vec<DeviceLog>, DbErr> {
        let entities = entity::prelude::DeviceLog::find()
            .filter(entity::device_log::Column::DeviceId.eq(device_id))
            .order_by_desc(entity::device_log::Column::CreatedAt)
            .order_by_desc(entity::device_log::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DeviceLog::from_entity).collect())
    }
}
