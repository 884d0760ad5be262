use crate::{
    model::notification::{NotificationStatus, NotificationType},
    server::{
        data::notification::NotificationRepository,
        model::{notification::CreateNotificationParams, page::PageParams},
    },
};
use chrono::{Duration, Utc};
use entity::prelude::{Notification, User};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated_by_user;
mod update_status;

fn builder() -> TestBuilder {
    TestBuilder::new().with_table(User).with_table(Notification)
}
