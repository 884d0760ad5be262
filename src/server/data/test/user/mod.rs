use crate::{
    model::user::{UserRole, UserStatus},
    server::{
        data::user::UserRepository,
        model::{
            page::PageParams,
            user::{CreateUserParams, UpdateUserParams},
        },
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod email_taken;
mod find_by_id;
mod find_credentials_by_email;
mod get_all_paginated;
mod get_by_ids;
mod soft_delete;
mod update;
