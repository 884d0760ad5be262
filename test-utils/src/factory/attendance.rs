//! Attendance factory for creating check-in and check-out events.

use crate::factory::helpers::new_uuid;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating attendance events for an existing user.
///
/// # Example
///
/// ```rust,ignore
/// let check_in = AttendanceFactory::new(&db, &user.id)
///     .attendance_type("check_in")
///     .time(Utc::now())
///     .build()
///     .await?;
/// ```
pub struct AttendanceFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    attendance_type: String,
    time: DateTime<Utc>,
    status: String,
    notes: Option<String>,
}

impl<'a> AttendanceFactory<'a> {
    /// Creates a new AttendanceFactory with default values.
    ///
    /// Defaults:
    /// - attendance_type: `"check_in"`
    /// - time: now
    /// - status: `"present"`
    /// - notes: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user the event belongs to
    pub fn new(db: &'a DatabaseConnection, user_id: &str) -> Self {
        Self {
            db,
            user_id: user_id.to_string(),
            attendance_type: "check_in".to_string(),
            time: Utc::now(),
            status: "present".to_string(),
            notes: None,
        }
    }

    pub fn attendance_type(mut self, attendance_type: impl Into<String>) -> Self {
        self.attendance_type = attendance_type.into();
        self
    }

    pub fn time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    pub async fn build(self) -> Result<entity::attendance::Model, DbErr> {
        let now = Utc::now();
        entity::attendance::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            user_id: ActiveValue::Set(self.user_id),
            time: ActiveValue::Set(self.time),
            latitude: ActiveValue::Set(-6.2),
            longitude: ActiveValue::Set(106.8),
            selfie_url: ActiveValue::Set("https://example.com/selfie.jpg".to_string()),
            attendance_type: ActiveValue::Set(self.attendance_type),
            notes: ActiveValue::Set(self.notes),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a check-in for the user at the current time.
pub async fn create_attendance(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::attendance::Model, DbErr> {
    AttendanceFactory::new(db, user_id).build().await
}
