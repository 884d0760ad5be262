//! Notification factory for creating test notifications.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating notifications addressed to an existing user.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    notification_type: String,
    message: String,
    status: String,
    send_at: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - notification_type: `"info"`
    /// - message: `"Notification {id}"` where id is auto-incremented
    /// - status: `"unread"`
    /// - send_at: now
    pub fn new(db: &'a DatabaseConnection, user_id: &str) -> Self {
        Self {
            db,
            user_id: user_id.to_string(),
            notification_type: "info".to_string(),
            message: format!("Notification {}", next_id()),
            status: "unread".to_string(),
            send_at: Utc::now(),
        }
    }

    pub fn notification_type(mut self, notification_type: impl Into<String>) -> Self {
        self.notification_type = notification_type.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn send_at(mut self, send_at: DateTime<Utc>) -> Self {
        self.send_at = send_at;
        self
    }

    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            user_id: ActiveValue::Set(self.user_id),
            notification_type: ActiveValue::Set(self.notification_type),
            message: ActiveValue::Set(self.message),
            status: ActiveValue::Set(self.status),
            send_at: ActiveValue::Set(self.send_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread info notification for the user.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id).build().await
}
