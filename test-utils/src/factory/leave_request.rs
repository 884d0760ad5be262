//! Leave request factory for creating test leave requests.

use crate::factory::helpers::new_uuid;
use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating leave requests for an existing user.
pub struct LeaveRequestFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    leave_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: String,
}

impl<'a> LeaveRequestFactory<'a> {
    /// Creates a new LeaveRequestFactory with default values.
    ///
    /// Defaults:
    /// - leave_type: `"annual"`
    /// - start_date: one week from today
    /// - end_date: same as start_date
    /// - status: `"pending"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the requesting user
    pub fn new(db: &'a DatabaseConnection, user_id: &str) -> Self {
        let today = Utc::now().date_naive();
        let start = today.checked_add_days(Days::new(7)).unwrap_or(today);
        Self {
            db,
            user_id: user_id.to_string(),
            leave_type: "annual".to_string(),
            start_date: start,
            end_date: start,
            status: "pending".to_string(),
        }
    }

    pub fn leave_type(mut self, leave_type: impl Into<String>) -> Self {
        self.leave_type = leave_type.into();
        self
    }

    /// Sets the inclusive date range of the leave.
    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::leave_request::Model, DbErr> {
        let now = Utc::now();
        entity::leave_request::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            user_id: ActiveValue::Set(self.user_id),
            leave_type: ActiveValue::Set(self.leave_type),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            reason: ActiveValue::Set("Family matters".to_string()),
            status: ActiveValue::Set(self.status),
            reviewed_by: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            note: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending annual leave request for the user.
pub async fn create_leave_request(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::leave_request::Model, DbErr> {
    LeaveRequestFactory::new(db, user_id).build().await
}
