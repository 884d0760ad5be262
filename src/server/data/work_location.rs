//! Work location data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::{
    data::new_id,
    model::work_location::{CreateWorkLocationParams, UpdateWorkLocationParams, WorkLocation},
};

pub struct WorkLocationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkLocationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateWorkLocationParams) -> Result<WorkLocation, DbErr> {
        let now = Utc::now();
        let entity = entity::work_location::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            country: ActiveValue::Set(params.country),
            postal_code: ActiveValue::Set(params.postal_code),
            timezone: ActiveValue::Set(params.timezone),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(WorkLocation::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<WorkLocation>, DbErr> {
        let entity = entity::prelude::WorkLocation::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(WorkLocation::from_entity))
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::WorkLocation::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every work location ordered by name.
    pub async fn get_all(&self) -> Result<Vec<WorkLocation>, DbErr> {
        let entities = entity::prelude::WorkLocation::find()
            .order_by_asc(entity::work_location::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(WorkLocation::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(WorkLocation))` - The updated location
    /// - `Ok(None)` - No location with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        params: UpdateWorkLocationParams,
    ) -> Result<Option<WorkLocation>, DbErr> {
        let Some(entity) = entity::prelude::WorkLocation::find_by_id(params.id.clone())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::work_location::ActiveModel = entity.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(city) = params.city {
            active.city = ActiveValue::Set(city);
        }
        if let Some(state) = params.state {
            active.state = ActiveValue::Set(state);
        }
        if let Some(country) = params.country {
            active.country = ActiveValue::Set(country);
        }
        if let Some(postal_code) = params.postal_code {
            active.postal_code = ActiveValue::Set(postal_code);
        }
        if let Some(timezone) = params.timezone {
            active.timezone = ActiveValue::Set(timezone);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(WorkLocation::from_entity(updated)))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::WorkLocation::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
