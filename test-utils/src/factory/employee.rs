//! Employee factory for creating test employee entities.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating employee records attached to an existing user.
///
/// # Example
///
/// ```rust,ignore
/// let employee = EmployeeFactory::new(&db, &user.id)
///     .name("Ada Lovelace")
///     .status("inactive")
///     .build()
///     .await?;
/// ```
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    department_id: Option<String>,
    name: String,
    status: String,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - department_id: `None`
    /// - name: `"Employee {id}"` where id is auto-incremented
    /// - status: `"active"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the owning user
    pub fn new(db: &'a DatabaseConnection, user_id: &str) -> Self {
        Self {
            db,
            user_id: user_id.to_string(),
            department_id: None,
            name: format!("Employee {}", next_id()),
            status: "active".to_string(),
        }
    }

    pub fn department_id(mut self, department_id: Option<String>) -> Self {
        self.department_id = department_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        let now = Utc::now();
        entity::employee::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            user_id: ActiveValue::Set(self.user_id),
            department_id: ActiveValue::Set(self.department_id),
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(None),
            timezone: ActiveValue::Set("UTC".to_string()),
            photo_url: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            join_date: ActiveValue::Set(now.date_naive()),
            reporting_to: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee record for a user with default values.
pub async fn create_employee(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db, user_id).build().await
}
