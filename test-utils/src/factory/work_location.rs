//! Work location factory for creating test work locations.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test work locations with customizable fields.
pub struct WorkLocationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    city: String,
}

impl<'a> WorkLocationFactory<'a> {
    /// Creates a new WorkLocationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Location {id}"` where id is auto-incremented
    /// - city: `"Jakarta"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Location {}", next_id()),
            city: "Jakarta".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub async fn build(self) -> Result<entity::work_location::Model, DbErr> {
        let now = Utc::now();
        entity::work_location::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set("1 Main Street".to_string()),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set("DKI".to_string()),
            country: ActiveValue::Set("Indonesia".to_string()),
            postal_code: ActiveValue::Set("10110".to_string()),
            timezone: ActiveValue::Set("UTC".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a work location with default values.
pub async fn create_work_location(
    db: &DatabaseConnection,
) -> Result<entity::work_location::Model, DbErr> {
    WorkLocationFactory::new(db).build().await
}
