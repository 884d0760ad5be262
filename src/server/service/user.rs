//! User service for business logic.
//!
//! This module provides the `UserService` for account management: creating users with
//! their employee record, profile reads and updates, and the staff user directory.
//! Single-user and list-page lookups are served read-through from the cache; every
//! write invalidates the affected user key and all cached list pages.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, UpdateProfileDto, UpdateUserDto, UserRole},
    server::{
        cache::{self, key, Cache},
        data::{department::DepartmentRepository, user::UserRepository},
        error::AppError,
        model::{
            department::DEFAULT_DEPARTMENT,
            page::{Page, PageParams},
            user::{CreateUserParams, UpdateUserParams, User, DEFAULT_TIMEZONE},
        },
        service::{parse_enum, require_text},
        util::password::hash_password,
    },
};

const MIN_PASSWORD_LENGTH: usize = 6;

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn Cache,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `cache` - Cache backend for read-through lookups
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn Cache) -> Self {
        Self { db, cache }
    }

    /// Creates a user and its employee record.
    ///
    /// Registration and the admin endpoint share this path; registration never passes a
    /// role, so self-registered users are always employees. The department is looked up
    /// by name and defaults to the seeded IT department.
    ///
    /// # Arguments
    /// - `dto` - New account details with a plain-text password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Invalid email, short password, blank name or unknown role
    /// - `Err(AppError::Conflict)` - Email already belongs to a user
    /// - `Err(AppError::NotFound)` - Department does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, dto: CreateUserDto) -> Result<User, AppError> {
        validate_email(&dto.email)?;
        validate_password(&dto.password)?;
        require_text(&dto.full_name, "full name is required")?;

        let role = match dto.role.as_deref() {
            Some(role) => parse_enum::<UserRole>(role)?,
            None => UserRole::Employee,
        };

        let user_repo = UserRepository::new(self.db);
        let email = dto.email.trim().to_string();
        if user_repo.email_taken(&email, None).await? {
            return Err(AppError::Conflict("email already exist".to_string()));
        }

        let department_name = dto
            .department
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string());
        let department = DepartmentRepository::new(self.db)
            .find_by_name(&department_name)
            .await?
            .ok_or_else(|| AppError::NotFound("department not found".to_string()))?;

        let (user, employee) = user_repo
            .create(CreateUserParams {
                email,
                password_hash: hash_password(&dto.password)?,
                full_name: dto.full_name.trim().to_string(),
                role,
                location: dto.location,
                timezone: dto.timezone.unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
                department_id: department.id,
            })
            .await?;

        tracing::info!(
            "Created user {} ({}) with employee record {}",
            user.id,
            user.role,
            employee.id
        );

        cache::invalidate(self.cache, &[], &[key::USERS_PREFIX]).await;

        Ok(user)
    }

    /// Gets a live user, reading through the cache.
    ///
    /// # Arguments
    /// - `id` - User ID
    ///
    /// # Returns
    /// - `Ok(User)` - User from the cache or the database
    /// - `Err(AppError::NotFound)` - No live user with that ID
    /// - `Err(AppError::DbErr)` - Database error on a cache miss
    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        let cache_key = key::user(id);
        if let Some(user) = cache::get_json::<User>(self.cache, &cache_key).await {
            return Ok(user);
        }

        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        cache::set_json(self.cache, &cache_key, &user, None).await;

        Ok(user)
    }

    /// Gets one page of live users, reading through the cache.
    ///
    /// Pages are cached for a short time because any user write drops them all.
    ///
    /// # Arguments
    /// - `params` - One-based page and page size
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users on the requested page
    /// - `Err(AppError::DbErr)` - Database error on a cache miss
    pub async fn get_users(&self, params: PageParams) -> Result<Page<User>, AppError> {
        let cache_key = key::users_page(params.page, params.per_page);
        if let Some(page) = cache::get_json::<Page<User>>(self.cache, &cache_key).await {
            return Ok(page);
        }

        let page = UserRepository::new(self.db)
            .get_all_paginated(params)
            .await?;

        cache::set_json(self.cache, &cache_key, &page, Some(key::USERS_PAGE_TTL)).await;

        Ok(page)
    }

    /// Applies a partial update to a user on behalf of staff.
    ///
    /// # Arguments
    /// - `id` - User ID
    /// - `dto` - Fields to change; a given password is hashed before storage
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - A given field fails validation
    /// - `Err(AppError::Conflict)` - New email belongs to another user
    /// - `Err(AppError::NotFound)` - No live user with that ID
    pub async fn update_user(&self, id: &str, dto: UpdateUserDto) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = match dto.email {
            Some(email) => {
                validate_email(&email)?;
                let email = email.trim().to_string();
                if user_repo.email_taken(&email, Some(id)).await? {
                    return Err(AppError::Conflict("email already exist".to_string()));
                }
                Some(email)
            }
            None => None,
        };

        let password_hash = match dto.password {
            Some(password) => {
                validate_password(&password)?;
                Some(hash_password(&password)?)
            }
            None => None,
        };

        if let Some(full_name) = &dto.full_name {
            require_text(full_name, "full name is required")?;
        }

        let params = UpdateUserParams {
            id: id.to_string(),
            email,
            password_hash,
            full_name: dto.full_name.map(|name| name.trim().to_string()),
            role: dto.role.as_deref().map(parse_enum).transpose()?,
            status: dto.status.as_deref().map(parse_enum).transpose()?,
            location: dto.location,
            timezone: dto.timezone,
            photo_url: dto.photo_url,
        };

        let user = user_repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        cache::invalidate(self.cache, &[key::user(id)], &[key::USERS_PREFIX]).await;

        Ok(user)
    }

    /// Updates the caller's own profile.
    ///
    /// Only personal fields are accepted; email, role and status stay under staff control.
    pub async fn update_profile(
        &self,
        user_id: &str,
        dto: UpdateProfileDto,
    ) -> Result<User, AppError> {
        self.update_user(
            user_id,
            UpdateUserDto {
                password: dto.password,
                full_name: dto.full_name,
                location: dto.location,
                timezone: dto.timezone,
                photo_url: dto.photo_url,
                ..Default::default()
            },
        )
        .await
    }

    /// Soft-deletes a user and drops every cached copy of it.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No live user with that ID
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        if !UserRepository::new(self.db).soft_delete(id).await? {
            return Err(AppError::NotFound("user not found".to_string()));
        }

        tracing::info!("Soft-deleted user {}", id);

        cache::invalidate(self.cache, &[key::user(id)], &[key::USERS_PREFIX]).await;

        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("invalid email address".to_string()));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::user::UserStatus,
        server::{cache::memory::MemoryCache, error::cache::CacheError},
    };
    use async_trait::async_trait;
    use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};
    use std::time::Duration;
    use test_utils::{builder::TestBuilder, factory};

    /// Cache backend whose every operation fails, like an unreachable Redis.
    struct UnavailableCache;

    fn unavailable() -> CacheError {
        CacheError::Redis(redis::RedisError::from((
            redis::ErrorKind::IoError,
            "cache unavailable",
        )))
    }

    #[async_trait]
    impl Cache for UnavailableCache {
        async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(unavailable())
        }

        async fn set(
            &self,
            _key: &str,
            _value: &str,
            _ttl: Option<Duration>,
        ) -> Result<(), CacheError> {
            Err(unavailable())
        }

        async fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Err(unavailable())
        }

        async fn delete_by_prefix(&self, _prefix: &str) -> Result<(), CacheError> {
            Err(unavailable())
        }
    }

    fn new_user(email: &str) -> CreateUserDto {
        CreateUserDto {
            email: email.to_string(),
            password: "secret123".to_string(),
            full_name: "Grace Hopper".to_string(),
            role: None,
            department: None,
            location: None,
            timezone: None,
        }
    }

    async fn seed_default_department(db: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
        factory::department::DepartmentFactory::new(db)
            .name(DEFAULT_DEPARTMENT)
            .build()
            .await?;
        Ok(())
    }

    /// Tests creating a user in the default department.
    ///
    /// Expected: Ok with an employee role and a bcrypt hash stored
    #[tokio::test]
    async fn creates_user_in_default_department() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        seed_default_department(db).await?;
        let cache = MemoryCache::new();

        let service = UserService::new(db, &cache);
        let user = service.create(new_user("grace@example.com")).await?;

        assert_eq!(user.role, UserRole::Employee);
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.timezone, DEFAULT_TIMEZONE);

        let row = entity::prelude::User::find_by_id(user.id.clone())
            .one(db)
            .await?
            .unwrap();
        assert_ne!(row.password, "secret123");
        assert!(row.password.starts_with("$2"));

        Ok(())
    }

    /// Tests validation of new accounts.
    ///
    /// Expected: Err(BadRequest) for each invalid field
    #[tokio::test]
    async fn rejects_invalid_account_fields() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        seed_default_department(db).await?;
        let cache = MemoryCache::new();
        let service = UserService::new(db, &cache);

        let mut bad_email = new_user("no-at-sign");
        bad_email.email = "no-at-sign".to_string();
        let mut short_password = new_user("short@example.com");
        short_password.password = "12345".to_string();
        let mut blank_name = new_user("blank@example.com");
        blank_name.full_name = "  ".to_string();
        let mut bad_role = new_user("role@example.com");
        bad_role.role = Some("owner".to_string());

        for dto in [bad_email, short_password, blank_name, bad_role] {
            let result = service.create(dto).await;
            assert!(matches!(result, Err(AppError::BadRequest(_))));
        }

        Ok(())
    }

    /// Tests that a taken email is a conflict.
    ///
    /// Expected: Err(Conflict) with "email already exist"
    #[tokio::test]
    async fn rejects_duplicate_email() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        seed_default_department(db).await?;
        factory::user::UserFactory::new(db)
            .email("taken@example.com")
            .build()
            .await?;
        let cache = MemoryCache::new();

        let service = UserService::new(db, &cache);
        let result = service.create(new_user("taken@example.com")).await;

        assert!(matches!(result, Err(AppError::Conflict(msg)) if msg == "email already exist"));

        Ok(())
    }

    /// Tests that an unknown department name is not found.
    ///
    /// Expected: Err(NotFound)
    #[tokio::test]
    async fn rejects_unknown_department() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();

        let service = UserService::new(db, &cache);
        let mut dto = new_user("lost@example.com");
        dto.department = Some("Nowhere".to_string());
        let result = service.create(dto).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Tests that a cached user is served without touching the database.
    ///
    /// Renames the user directly in the database after the first read; the second read
    /// must still return the cached name.
    ///
    /// Expected: cached value returned on hit
    #[tokio::test]
    async fn serves_user_from_cache() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();
        let row = factory::user::UserFactory::new(db)
            .full_name("Original")
            .build()
            .await?;

        let service = UserService::new(db, &cache);
        let first = service.get_user(&row.id).await?;

        let mut active: entity::user::ActiveModel = row.clone().into();
        active.full_name = ActiveValue::Set("Changed behind the cache".to_string());
        active.update(db).await?;

        let second = service.get_user(&row.id).await?;

        assert_eq!(first.full_name, "Original");
        assert_eq!(second.full_name, "Original");
        assert!(cache.get(&key::user(&row.id)).await.unwrap().is_some());

        Ok(())
    }

    /// Tests that updates invalidate the user key and list pages.
    ///
    /// Expected: both cache entries removed and fresh data returned
    #[tokio::test]
    async fn update_invalidates_cache() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();
        let row = factory::create_user(db).await?;

        let service = UserService::new(db, &cache);
        service.get_user(&row.id).await?;
        service.get_users(PageParams::default()).await?;

        let updated = service
            .update_user(
                &row.id,
                UpdateUserDto {
                    full_name: Some("Updated".to_string()),
                    role: Some("hr".to_string()),
                    ..Default::default()
                },
            )
            .await?;

        assert_eq!(updated.role, UserRole::Hr);
        assert!(cache.get(&key::user(&row.id)).await.unwrap().is_none());
        assert!(cache
            .get(&key::users_page(1, 10))
            .await
            .unwrap()
            .is_none());
        assert_eq!(service.get_user(&row.id).await?.full_name, "Updated");

        Ok(())
    }

    /// Tests that taking another user's email is a conflict while keeping one's own is not.
    ///
    /// Expected: Err(Conflict) then Ok
    #[tokio::test]
    async fn update_checks_email_ownership() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();
        let user = factory::create_user(db).await?;
        let other = factory::create_user(db).await?;

        let service = UserService::new(db, &cache);
        let conflict = service
            .update_user(
                &user.id,
                UpdateUserDto {
                    email: Some(other.email.clone()),
                    ..Default::default()
                },
            )
            .await;
        let same = service
            .update_user(
                &user.id,
                UpdateUserDto {
                    email: Some(user.email.clone()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(conflict, Err(AppError::Conflict(_))));
        assert!(same.is_ok());

        Ok(())
    }

    /// Tests that profile updates cannot change the role.
    ///
    /// Expected: Ok with the name changed and the role unchanged
    #[tokio::test]
    async fn profile_update_keeps_role() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();
        let user = factory::create_user(db).await?;

        let service = UserService::new(db, &cache);
        let updated = service
            .update_profile(
                &user.id,
                UpdateProfileDto {
                    full_name: Some("New Name".to_string()),
                    location: Some("Bandung".to_string()),
                    ..Default::default()
                },
            )
            .await?;

        assert_eq!(updated.full_name, "New Name");
        assert_eq!(updated.location.as_deref(), Some("Bandung"));
        assert_eq!(updated.role, UserRole::Employee);

        Ok(())
    }

    /// Tests paging with cache population and TTL-backed reuse.
    ///
    /// Expected: second read served from cache even after a direct insert
    #[tokio::test]
    async fn caches_user_pages() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();
        factory::create_user(db).await?;

        let service = UserService::new(db, &cache);
        let first = service.get_users(PageParams::default()).await?;
        factory::create_user(db).await?;
        let second = service.get_users(PageParams::default()).await?;

        assert_eq!(first.total, 1);
        assert_eq!(second.total, 1);

        Ok(())
    }

    /// Tests soft deletion through the service.
    ///
    /// Expected: user hidden afterwards and a second delete is NotFound
    #[tokio::test]
    async fn deletes_user() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = MemoryCache::new();
        let user = factory::create_user(db).await?;

        let service = UserService::new(db, &cache);
        service.get_user(&user.id).await?;
        service.delete_user(&user.id).await?;

        assert!(matches!(
            service.get_user(&user.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_user(&user.id).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    /// Tests that every user operation falls back to the database when the cache fails.
    ///
    /// Expected: reads, update and delete all succeed with database results
    #[tokio::test]
    async fn ignores_cache_failures() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = UnavailableCache;
        let user = factory::create_user(db).await?;
        factory::create_user(db).await?;

        let service = UserService::new(db, &cache);

        let fetched = service.get_user(&user.id).await?;
        assert_eq!(fetched.id, user.id);

        let page = service.get_users(PageParams::default()).await?;
        assert_eq!(page.total, 2);

        let updated = service
            .update_user(
                &user.id,
                UpdateUserDto {
                    full_name: Some("Renamed Without Cache".to_string()),
                    ..Default::default()
                },
            )
            .await?;
        assert_eq!(updated.full_name, "Renamed Without Cache");

        service.delete_user(&user.id).await?;
        assert!(matches!(
            service.get_user(&user.id).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
