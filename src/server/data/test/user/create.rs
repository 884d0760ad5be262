use super::*;

fn params(email: &str, department_id: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        full_name: "Ada Lovelace".to_string(),
        role: UserRole::Employee,
        location: Some("London".to_string()),
        timezone: "UTC".to_string(),
        department_id: department_id.to_string(),
    }
}

/// Tests creating a user together with its employee record.
///
/// Verifies that the user starts active with a verified email and that the
/// employee record copies the user's name and joins the given department today.
///
/// Expected: Ok with linked user and employee
#[tokio::test]
async fn creates_user_and_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let repo = UserRepository::new(db);
    let (user, employee) = repo.create(params("ada@example.com", &department.id)).await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, UserRole::Employee);
    assert_eq!(user.status, UserStatus::Active);
    assert!(user.email_verified_at.is_some());
    assert_eq!(employee.user_id, user.id);
    assert_eq!(employee.name, "Ada Lovelace");
    assert_eq!(employee.department_id, Some(department.id));
    assert_eq!(employee.status, UserStatus::Active);
    assert_eq!(employee.join_date, user.created_at.date_naive());

    Ok(())
}

/// Tests that a duplicate email rolls back the whole registration.
///
/// Verifies that the unique index on email rejects the second insert and that
/// no orphaned employee record is left behind.
///
/// Expected: Err and a single employee row
#[tokio::test]
async fn rolls_back_on_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let repo = UserRepository::new(db);
    repo.create(params("dup@example.com", &department.id)).await?;
    let result = repo.create(params("dup@example.com", &department.id)).await;

    assert!(result.is_err());
    let employees = entity::prelude::Employee::find().all(db).await?;
    assert_eq!(employees.len(), 1);

    Ok(())
}
