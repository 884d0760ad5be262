//! Notification service.
//!
//! Staff send notifications to individual users; the leave workflow sends them
//! automatically. Users read and mark their own notifications.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::notification::{
        CreateNotificationDto, NotificationStatus, NotificationType, UpdateNotificationStatusDto,
    },
    server::{
        data::{notification::NotificationRepository, user::UserRepository},
        error::AppError,
        model::{
            actor::Actor,
            notification::{CreateNotificationParams, Notification},
            page::{Page, PageParams},
        },
        service::{parse_enum, require_text},
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a notification to a user.
    ///
    /// # Arguments
    /// - `dto` - Recipient, type, message and optional send time (defaults to now)
    ///
    /// # Returns
    /// - `Ok(Notification)` - The stored unread notification
    /// - `Err(AppError::BadRequest)` - Unknown type or blank message
    /// - `Err(AppError::NotFound)` - Recipient does not exist
    pub async fn create(&self, dto: CreateNotificationDto) -> Result<Notification, AppError> {
        let notification_type = parse_enum::<NotificationType>(&dto.notification_type)?;
        require_text(&dto.message, "message is required")?;

        if UserRepository::new(self.db)
            .find_by_id(&dto.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("user not found".to_string()));
        }

        Ok(NotificationRepository::new(self.db)
            .create(CreateNotificationParams {
                user_id: dto.user_id,
                notification_type,
                message: dto.message,
                send_at: dto.send_at.unwrap_or_else(Utc::now),
            })
            .await?)
    }

    /// Gets the caller's notifications, newest first.
    pub async fn list(
        &self,
        user_id: &str,
        params: PageParams,
    ) -> Result<Page<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_paginated_by_user(user_id, params)
            .await?)
    }

    pub async fn get(&self, actor: &Actor, id: &str) -> Result<Notification, AppError> {
        let notification = self.find(id).await?;
        actor.ensure_owner_or_staff(&notification.user_id, "read notification")?;

        Ok(notification)
    }

    /// Marks a notification read or unread.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The updated notification
    /// - `Err(AppError::BadRequest)` - Status is not `read` or `unread`
    /// - `Err(AppError::NotFound)` - No notification with that ID
    /// - `Err(AuthError::AccessDenied)` - Caller is neither the recipient nor staff
    pub async fn update_status(
        &self,
        actor: &Actor,
        id: &str,
        dto: UpdateNotificationStatusDto,
    ) -> Result<Notification, AppError> {
        let status = parse_enum::<NotificationStatus>(&dto.status)?;

        let notification = self.find(id).await?;
        actor.ensure_owner_or_staff(&notification.user_id, "update notification")?;

        NotificationRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("notification not found".to_string()))
    }

    pub async fn delete(&self, actor: &Actor, id: &str) -> Result<(), AppError> {
        let notification = self.find(id).await?;
        actor.ensure_owner_or_staff(&notification.user_id, "delete notification")?;

        NotificationRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("notification not found".to_string()))
    }
}
