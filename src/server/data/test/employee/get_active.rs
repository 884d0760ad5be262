use super::*;

/// Tests listing active employees of live users.
///
/// Creates an active employee, an inactive employee and an active employee whose
/// user was soft-deleted. Only the first should be returned and counted.
///
/// Expected: Ok with one employee
#[tokio::test]
async fn returns_active_employees_of_live_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, active) = factory::helpers::create_user_with_employee(db).await?;

    let inactive_user = factory::create_user(db).await?;
    factory::employee::EmployeeFactory::new(db, &inactive_user.id)
        .status("inactive")
        .build()
        .await?;

    let deleted_user = factory::user::UserFactory::new(db)
        .deleted_at(Some(chrono::Utc::now()))
        .build()
        .await?;
    factory::create_employee(db, &deleted_user.id).await?;

    let repo = EmployeeRepository::new(db);
    let employees = repo.get_active().await?;

    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id, active.id);
    assert_eq!(repo.count_active().await?, 1);

    Ok(())
}
