//! Notification domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::notification::{NotificationDto, NotificationStatus, NotificationType},
    server::model::parse_column,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub notification_type: NotificationType,
    pub message: String,
    pub status: NotificationStatus,
    pub send_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, DbErr> {
        Ok(Self {
            notification_type: parse_column(&entity.notification_type)?,
            status: parse_column(&entity.status)?,
            id: entity.id,
            user_id: entity.user_id,
            message: entity.message,
            send_at: entity.send_at,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            user_id: self.user_id,
            notification_type: self.notification_type,
            message: self.message,
            status: self.status,
            send_at: self.send_at,
            created_at: self.created_at,
        }
    }
}

/// Parameters for a new notification. New notifications are always unread.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_id: String,
    pub notification_type: NotificationType,
    pub message: String,
    pub send_at: DateTime<Utc>,
}
