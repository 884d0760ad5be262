//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// names and emails to prevent collisions with unique indexes.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh UUID v4 primary key.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates a user with a department and an employee record.
///
/// Requires the tables added by `TestBuilder::with_user_tables()`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, department, employee))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_employee(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::department::Model,
        entity::employee::Model,
    ),
    DbErr,
> {
    create_user_with_role(db, "employee").await
}

/// Creates a user with the given role, a department and an employee record.
///
/// # Arguments
/// - `db` - Database connection
/// - `role` - Stored role value such as `"admin"` or `"hr"`
///
/// # Returns
/// - `Ok((user, department, employee))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: &str,
) -> Result<
    (
        entity::user::Model,
        entity::department::Model,
        entity::employee::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::UserFactory::new(db)
        .role(role)
        .build()
        .await?;
    let department = crate::factory::department::create_department(db).await?;
    let employee = crate::factory::employee::EmployeeFactory::new(db, &user.id)
        .name(user.full_name.clone())
        .department_id(Some(department.id.clone()))
        .build()
        .await?;

    Ok((user, department, employee))
}
