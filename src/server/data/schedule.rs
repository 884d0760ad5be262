//! Schedule and shift swap data repository.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::new_id,
    model::schedule::{
        CreateScheduleParams, Schedule, ScheduleSwapRequest, UpdateScheduleParams,
        SWAP_STATUS_PENDING,
    },
};

pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateScheduleParams) -> Result<Schedule, DbErr> {
        let now = Utc::now();
        let entity = entity::schedule::ActiveModel {
            id: ActiveValue::Set(new_id()),
            user_id: ActiveValue::Set(params.user_id),
            date: ActiveValue::Set(params.date),
            shift_start: ActiveValue::Set(params.shift_start),
            shift_end: ActiveValue::Set(params.shift_end),
            break_start: ActiveValue::Set(params.break_start),
            break_end: ActiveValue::Set(params.break_end),
            work_location_id: ActiveValue::Set(params.work_location_id),
            schedule_type: ActiveValue::Set(params.schedule_type.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Schedule::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Schedule>, DbErr> {
        entity::prelude::Schedule::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Schedule::from_entity)
            .transpose()
    }

    /// Gets schedules ordered by date and shift start, optionally for one user.
    pub async fn get_all(&self, user_id: Option<&str>) -> Result<Vec<Schedule>, DbErr> {
        let mut select = entity::prelude::Schedule::find();

        if let Some(user_id) = user_id {
            select = select.filter(entity::schedule::Column::UserId.eq(user_id));
        }

        select
            .order_by_asc(entity::schedule::Column::Date)
            .order_by_asc(entity::schedule::Column::ShiftStart)
            .all(self.db)
            .await?
            .into_iter()
            .map(Schedule::from_entity)
            .collect()
    }

    /// Finds a user's earliest schedule on a given date.
    ///
    /// Used to decide whether a check-in is late.
    pub async fn find_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<Schedule>, DbErr> {
        entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::UserId.eq(user_id))
            .filter(entity::schedule::Column::Date.eq(date))
            .order_by_asc(entity::schedule::Column::ShiftStart)
            .one(self.db)
            .await?
            .map(Schedule::from_entity)
            .transpose()
    }

    /// Finds a user's first schedule on or after `from`.
    pub async fn find_next_for_user(
        &self,
        user_id: &str,
        from: NaiveDate,
    ) -> Result<Option<Schedule>, DbErr> {
        entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::UserId.eq(user_id))
            .filter(entity::schedule::Column::Date.gte(from))
            .order_by_asc(entity::schedule::Column::Date)
            .order_by_asc(entity::schedule::Column::ShiftStart)
            .one(self.db)
            .await?
            .map(Schedule::from_entity)
            .transpose()
    }

    /// Gets a user's schedules dated within `[from, to]`, ordered by date.
    pub async fn get_for_user_between(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Schedule>, DbErr> {
        entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::UserId.eq(user_id))
            .filter(entity::schedule::Column::Date.gte(from))
            .filter(entity::schedule::Column::Date.lte(to))
            .order_by_asc(entity::schedule::Column::Date)
            .order_by_asc(entity::schedule::Column::ShiftStart)
            .all(self.db)
            .await?
            .into_iter()
            .map(Schedule::from_entity)
            .collect()
    }

    /// Replaces a schedule's editable fields.
    ///
    /// # Returns
    /// - `Ok(Some(Schedule))` - The updated schedule
    /// - `Ok(None)` - No schedule with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdateScheduleParams) -> Result<Option<Schedule>, DbErr> {
        let Some(entity) = entity::prelude::Schedule::find_by_id(params.id.clone())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::schedule::ActiveModel = entity.into();
        active.date = ActiveValue::Set(params.date);
        active.shift_start = ActiveValue::Set(params.shift_start);
        active.shift_end = ActiveValue::Set(params.shift_end);
        active.break_start = ActiveValue::Set(params.break_start);
        active.break_end = ActiveValue::Set(params.break_end);
        active.work_location_id = ActiveValue::Set(params.work_location_id);
        active.schedule_type = ActiveValue::Set(params.schedule_type.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Schedule::from_entity(updated)?))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Schedule::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records a pending request to swap two schedules.
    ///
    /// # Arguments
    /// - `requester_id` - User asking for the swap, owner of `schedule_id_1`
    /// - `schedule_id_1` - Requester's schedule
    /// - `schedule_id_2` - Schedule to swap with
    pub async fn create_swap_request(
        &self,
        requester_id: &str,
        schedule_id_1: &str,
        schedule_id_2: &str,
    ) -> Result<ScheduleSwapRequest, DbErr> {
        let entity = entity::schedule_swap_request::ActiveModel {
            id: ActiveValue::Set(new_id()),
            requester_id: ActiveValue::Set(requester_id.to_string()),
            schedule_id_1: ActiveValue::Set(schedule_id_1.to_string()),
            schedule_id_2: ActiveValue::Set(schedule_id_2.to_string()),
            status: ActiveValue::Set(SWAP_STATUS_PENDING.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(ScheduleSwapRequest::from_entity(entity))
    }
}
