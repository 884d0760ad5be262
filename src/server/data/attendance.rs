//! Attendance data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashSet;

use crate::{
    model::attendance::AttendanceType,
    server::{
        data::{fetch_page, new_id},
        model::{
            attendance::{
                Attendance, AttendanceFilter, CreateAttendanceParams, UpdateAttendanceParams,
            },
            page::{Page, PageParams},
        },
        util::date::day_range,
    },
};

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an attendance event.
    ///
    /// # Arguments
    /// - `params` - Event fields with the status already determined
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The stored event
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateAttendanceParams) -> Result<Attendance, DbErr> {
        let now = Utc::now();
        let entity = entity::attendance::ActiveModel {
            id: ActiveValue::Set(new_id()),
            user_id: ActiveValue::Set(params.user_id),
            time: ActiveValue::Set(params.time),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            selfie_url: ActiveValue::Set(params.selfie_url),
            attendance_type: ActiveValue::Set(params.attendance_type.as_str().to_string()),
            notes: ActiveValue::Set(params.notes),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Attendance::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Attendance>, DbErr> {
        entity::prelude::Attendance::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Attendance::from_entity)
            .transpose()
    }

    /// Gets attendance events matching a filter with pagination, newest first.
    ///
    /// # Arguments
    /// - `filter` - Optional user, UTC day and type restrictions
    /// - `params` - One-based page and page size
    ///
    /// # Returns
    /// - `Ok(Page<Attendance>)` - Matching events on the requested page
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: AttendanceFilter,
        params: PageParams,
    ) -> Result<Page<Attendance>, DbErr> {
        let mut select = entity::prelude::Attendance::find();

        if let Some(user_id) = filter.user_id {
            select = select.filter(entity::attendance::Column::UserId.eq(user_id));
        }
        if let Some(date) = filter.date {
            let (start, end) = day_range(date);
            select = select
                .filter(entity::attendance::Column::Time.gte(start))
                .filter(entity::attendance::Column::Time.lt(end));
        }
        if let Some(attendance_type) = filter.attendance_type {
            select = select
                .filter(entity::attendance::Column::AttendanceType.eq(attendance_type.as_str()));
        }

        let select = select
            .order_by_desc(entity::attendance::Column::Time)
            .order_by_desc(entity::attendance::Column::Id);

        let (entities, total) = fetch_page(self.db, select, params).await?;
        let items = entities
            .into_iter()
            .map(Attendance::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, total, params))
    }

    /// Gets one user's events in the half-open range `[start, end)`, oldest first.
    pub async fn get_by_user_between(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Attendance>, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::UserId.eq(user_id))
            .filter(entity::attendance::Column::Time.gte(start))
            .filter(entity::attendance::Column::Time.lt(end))
            .order_by_asc(entity::attendance::Column::Time)
            .all(self.db)
            .await?
            .into_iter()
            .map(Attendance::from_entity)
            .collect()
    }

    /// Gets every event in the half-open range `[start, end)`, oldest first.
    pub async fn get_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Attendance>, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::Time.gte(start))
            .filter(entity::attendance::Column::Time.lt(end))
            .order_by_asc(entity::attendance::Column::Time)
            .all(self.db)
            .await?
            .into_iter()
            .map(Attendance::from_entity)
            .collect()
    }

    /// Counts events of one type in the half-open range `[start, end)`.
    pub async fn count_by_type_between(
        &self,
        attendance_type: AttendanceType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::AttendanceType.eq(attendance_type.as_str()))
            .filter(entity::attendance::Column::Time.gte(start))
            .filter(entity::attendance::Column::Time.lt(end))
            .count(self.db)
            .await
    }

    /// Gets the IDs of users with at least one event in the half-open range `[start, end)`.
    pub async fn user_ids_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<HashSet<String>, DbErr> {
        let user_ids: Vec<String> = entity::prelude::Attendance::find()
            .select_only()
            .column(entity::attendance::Column::UserId)
            .distinct()
            .filter(entity::attendance::Column::Time.gte(start))
            .filter(entity::attendance::Column::Time.lt(end))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(user_ids.into_iter().collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Attendance))` - The updated event
    /// - `Ok(None)` - No event with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdateAttendanceParams) -> Result<Option<Attendance>, DbErr> {
        let Some(entity) = entity::prelude::Attendance::find_by_id(params.id.clone())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::attendance::ActiveModel = entity.into();

        if let Some(attendance_type) = params.attendance_type {
            active.attendance_type = ActiveValue::Set(attendance_type.as_str().to_string());
        }
        if let Some(time) = params.time {
            active.time = ActiveValue::Set(time);
        }
        if let Some(latitude) = params.latitude {
            active.latitude = ActiveValue::Set(latitude);
        }
        if let Some(longitude) = params.longitude {
            active.longitude = ActiveValue::Set(longitude);
        }
        if let Some(selfie_url) = params.selfie_url {
            active.selfie_url = ActiveValue::Set(selfie_url);
        }
        if let Some(notes) = params.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Attendance::from_entity(updated)?))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Attendance::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
