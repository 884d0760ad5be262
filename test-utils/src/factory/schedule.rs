//! Schedule factory for creating test shift schedules.

use crate::factory::helpers::new_uuid;
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating schedules for an existing user.
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    date: NaiveDate,
    shift_start: NaiveTime,
    shift_end: NaiveTime,
    work_location_id: Option<String>,
    schedule_type: String,
}

impl<'a> ScheduleFactory<'a> {
    /// Creates a new ScheduleFactory with default values.
    ///
    /// Defaults:
    /// - date: today
    /// - shift: 09:00 to 17:00
    /// - work_location_id: `None`
    /// - schedule_type: `"office"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the scheduled user
    pub fn new(db: &'a DatabaseConnection, user_id: &str) -> Self {
        Self {
            db,
            user_id: user_id.to_string(),
            date: Utc::now().date_naive(),
            shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
            work_location_id: None,
            schedule_type: "office".to_string(),
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn shift(mut self, shift_start: NaiveTime, shift_end: NaiveTime) -> Self {
        self.shift_start = shift_start;
        self.shift_end = shift_end;
        self
    }

    pub fn work_location_id(mut self, work_location_id: Option<String>) -> Self {
        self.work_location_id = work_location_id;
        self
    }

    pub fn schedule_type(mut self, schedule_type: impl Into<String>) -> Self {
        self.schedule_type = schedule_type.into();
        self
    }

    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        let now = Utc::now();
        entity::schedule::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            user_id: ActiveValue::Set(self.user_id),
            date: ActiveValue::Set(self.date),
            shift_start: ActiveValue::Set(self.shift_start),
            shift_end: ActiveValue::Set(self.shift_end),
            break_start: ActiveValue::Set(None),
            break_end: ActiveValue::Set(None),
            work_location_id: ActiveValue::Set(self.work_location_id),
            schedule_type: ActiveValue::Set(self.schedule_type),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a office 09:00-17:00 schedule for the user today.
pub async fn create_schedule(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, user_id).build().await
}
