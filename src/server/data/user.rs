//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Users are soft-deleted: a deleted user keeps its row with `deleted_at` set and is
//! excluded from every lookup in this repository. Registration creates the user and its
//! employee record in a single transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    model::user::UserStatus,
    server::{
        data::{fetch_page, new_id},
        model::{
            employee::Employee,
            page::{Page, PageParams},
            user::{CreateUserParams, UpdateUserParams, User, UserCredentials},
        },
    },
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and soft-deleting user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user together with its employee record.
    ///
    /// Both rows are inserted in one transaction so a failure never leaves a user without
    /// an employee. The user starts active with a verified email; the employee takes the
    /// user's name, location and timezone and joins today.
    ///
    /// # Arguments
    /// - `params` - User fields with an already-hashed password and the target department
    ///
    /// # Returns
    /// - `Ok((User, Employee))` - The created user and employee
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, params: CreateUserParams) -> Result<(User, Employee), DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(new_id()),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password_hash),
            full_name: ActiveValue::Set(params.full_name.clone()),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            location: ActiveValue::Set(params.location.clone()),
            timezone: ActiveValue::Set(params.timezone.clone()),
            photo_url: ActiveValue::Set(None),
            status: ActiveValue::Set(UserStatus::Active.as_str().to_string()),
            email_verified_at: ActiveValue::Set(Some(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(&txn)
        .await?;

        let employee = entity::employee::ActiveModel {
            id: ActiveValue::Set(new_id()),
            user_id: ActiveValue::Set(user.id.clone()),
            department_id: ActiveValue::Set(Some(params.department_id)),
            name: ActiveValue::Set(params.full_name),
            location: ActiveValue::Set(params.location),
            timezone: ActiveValue::Set(params.timezone),
            photo_url: ActiveValue::Set(None),
            status: ActiveValue::Set(UserStatus::Active.as_str().to_string()),
            join_date: ActiveValue::Set(now.date_naive()),
            reporting_to: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok((User::from_entity(user)?, Employee::from_entity(employee)?))
    }

    /// Finds a live user by ID.
    ///
    /// # Arguments
    /// - `id` - User ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found and not deleted
    /// - `Ok(None)` - No live user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id.to_string())
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a live user by email together with the stored password hash.
    ///
    /// Only used by login; every other lookup returns [`User`] without credentials.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - User and password hash
    /// - `Ok(None)` - No live user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let password_hash = entity.password.clone();
        let user = User::from_entity(entity)?;

        Ok(Some(UserCredentials {
            user,
            password_hash,
        }))
    }

    /// Checks whether an email is already taken by any user, deleted or not.
    ///
    /// Deleted users keep their row, so their email still occupies the unique index.
    ///
    /// # Arguments
    /// - `email` - Email address to check
    /// - `except_id` - User allowed to hold the email (the user being updated)
    ///
    /// # Returns
    /// - `Ok(true)` - Another user holds the email
    /// - `Ok(false)` - Email is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn email_taken(&self, email: &str, except_id: Option<&str>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = except_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets live users with pagination, ordered by full name.
    ///
    /// # Arguments
    /// - `params` - One-based page and page size
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users on the requested page with paging metadata
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(&self, params: PageParams) -> Result<Page<User>, DbErr> {
        let select = entity::prelude::User::find()
            .filter(entity::user::Column::DeletedAt.is_null())
            .order_by_asc(entity::user::Column::FullName)
            .order_by_asc(entity::user::Column::Id);

        let (entities, total) = fetch_page(self.db, select, params).await?;
        let users = entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(users, total, params))
    }

    /// Gets every live user, ordered by full name.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::DeletedAt.is_null())
            .order_by_asc(entity::user::Column::FullName)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Gets live users by ID in one query. Unknown or deleted IDs are skipped.
    pub async fn get_by_ids(&self, ids: &[String]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().cloned()))
            .filter(entity::user::Column::DeletedAt.is_null())
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Counts live users.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::DeletedAt.is_null())
            .count(self.db)
            .await
    }

    /// Applies a partial update to a live user.
    ///
    /// # Arguments
    /// - `params` - Fields to change; `None` leaves a field untouched
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No live user with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(params.id.clone())
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();

        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = params.password_hash {
            active.password = ActiveValue::Set(password_hash);
        }
        if let Some(full_name) = params.full_name {
            active.full_name = ActiveValue::Set(full_name);
        }
        if let Some(role) = params.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(location) = params.location {
            active.location = ActiveValue::Set(Some(location));
        }
        if let Some(timezone) = params.timezone {
            active.timezone = ActiveValue::Set(timezone);
        }
        if let Some(photo_url) = params.photo_url {
            active.photo_url = ActiveValue::Set(Some(photo_url));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)?))
    }

    /// Soft-deletes a user by stamping `deleted_at` and marking it inactive.
    ///
    /// # Arguments
    /// - `id` - User ID
    ///
    /// # Returns
    /// - `Ok(true)` - User was live and is now deleted
    /// - `Ok(false)` - No live user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: &str) -> Result<bool, DbErr> {
        let now = Utc::now();
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::DeletedAt.is_null())
            .col_expr(
                entity::user::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .col_expr(
                entity::user::Column::Status,
                sea_orm::sea_query::Expr::value(UserStatus::Inactive.as_str()),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
