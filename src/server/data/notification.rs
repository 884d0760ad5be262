//! Notification data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::notification::NotificationStatus,
    server::{
        data::{fetch_page, new_id},
        model::{
            notification::{CreateNotificationParams, Notification},
            page::{Page, PageParams},
        },
    },
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new unread notification.
    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            id: ActiveValue::Set(new_id()),
            user_id: ActiveValue::Set(params.user_id),
            notification_type: ActiveValue::Set(params.notification_type.as_str().to_string()),
            message: ActiveValue::Set(params.message),
            status: ActiveValue::Set(NotificationStatus::Unread.as_str().to_string()),
            send_at: ActiveValue::Set(params.send_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Notification::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Notification>, DbErr> {
        entity::prelude::Notification::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Notification::from_entity)
            .transpose()
    }

    /// Gets a user's notifications with pagination, newest first.
    pub async fn get_paginated_by_user(
        &self,
        user_id: &str,
        params: PageParams,
    ) -> Result<Page<Notification>, DbErr> {
        let select = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::SendAt)
            .order_by_desc(entity::notification::Column::Id);

        let (entities, total) = fetch_page(self.db, select, params).await?;
        let items = entities
            .into_iter()
            .map(Notification::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, total, params))
    }

    /// Sets a notification's read status.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - The updated notification
    /// - `Ok(None)` - No notification with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_status(
        &self,
        id: &str,
        status: NotificationStatus,
    ) -> Result<Option<Notification>, DbErr> {
        let Some(entity) = entity::prelude::Notification::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::notification::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.as_str().to_string());

        let updated = active.update(self.db).await?;

        Ok(Some(Notification::from_entity(updated)?))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
