use super::*;

/// Tests batch loading employee records by user ID.
///
/// Expected: Ok with only the requested users' records
#[tokio::test]
async fn loads_requested_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user1, _, _) = factory::helpers::create_user_with_employee(db).await?;
    let (user2, _, _) = factory::helpers::create_user_with_employee(db).await?;
    factory::helpers::create_user_with_employee(db).await?;

    let repo = EmployeeRepository::new(db);
    let employees = repo
        .get_by_user_ids(&[user1.id.clone(), user2.id.clone(), "missing".to_string()])
        .await?;

    assert_eq!(employees.len(), 2);
    assert!(employees.iter().any(|e| e.user_id == user1.id));
    assert!(employees.iter().any(|e| e.user_id == user2.id));

    Ok(())
}

/// Tests that an empty ID list skips the query.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let employees = repo.get_by_user_ids(&[]).await?;

    assert!(employees.is_empty());

    Ok(())
}
