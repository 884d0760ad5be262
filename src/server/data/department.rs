//! Department data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::new_id,
    model::department::{CreateDepartmentParams, Department, UpdateDepartmentParams},
};

pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a department.
    ///
    /// # Returns
    /// - `Ok(Department)` - The created department
    /// - `Err(DbErr)` - Database error, including a unique violation on name
    pub async fn create(&self, params: CreateDepartmentParams) -> Result<Department, DbErr> {
        let now = Utc::now();
        let entity = entity::department::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(params.name),
            location: ActiveValue::Set(params.location),
            timezone: ActiveValue::Set(params.timezone),
            wfa_policy: ActiveValue::Set(params.wfa_policy),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Department::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Department>, DbErr> {
        let entity = entity::prelude::Department::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Department::from_entity))
    }

    /// Finds a department by its exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Department>, DbErr> {
        let entity = entity::prelude::Department::find()
            .filter(entity::department::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Department::from_entity))
    }

    /// Checks whether a department other than `except_id` already uses `name`.
    pub async fn name_taken(&self, name: &str, except_id: Option<&str>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Department::find()
            .filter(entity::department::Column::Name.eq(name));

        if let Some(id) = except_id {
            query = query.filter(entity::department::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets every department ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Department>, DbErr> {
        let entities = entity::prelude::Department::find()
            .order_by_asc(entity::department::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Department::from_entity).collect())
    }

    /// Gets several departments by ID in one query.
    pub async fn get_by_ids(&self, ids: &[String]) -> Result<Vec<Department>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Department::find()
            .filter(entity::department::Column::Id.is_in(ids.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Department::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Department))` - The updated department
    /// - `Ok(None)` - No department with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdateDepartmentParams) -> Result<Option<Department>, DbErr> {
        let Some(entity) = entity::prelude::Department::find_by_id(params.id.clone())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::department::ActiveModel = entity.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(location) = params.location {
            active.location = ActiveValue::Set(location);
        }
        if let Some(timezone) = params.timezone {
            active.timezone = ActiveValue::Set(timezone);
        }
        if let Some(wfa_policy) = params.wfa_policy {
            active.wfa_policy = ActiveValue::Set(Some(wfa_policy));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Department::from_entity(updated)))
    }

    /// Deletes a department. Employees in it are detached by the foreign key.
    ///
    /// # Returns
    /// - `Ok(true)` - Department deleted
    /// - `Ok(false)` - No department with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Department::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
