use super::*;

/// Tests a partial department update followed by deletion.
///
/// Expected: Ok(Some) with the new location, then the row is gone
#[tokio::test]
async fn updates_and_deletes_department() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Department).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let repo = DepartmentRepository::new(db);
    let updated = repo
        .update(UpdateDepartmentParams {
            id: department.id.clone(),
            name: None,
            location: Some("Branch Office".to_string()),
            timezone: None,
            wfa_policy: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, department.name);
    assert_eq!(updated.location, "Branch Office");

    assert!(repo.delete(&department.id).await?);
    assert!(!repo.delete(&department.id).await?);
    assert!(repo.find_by_id(&department.id).await?.is_none());

    Ok(())
}

/// Tests updating a department that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_department() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Department).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);
    let result = repo
        .update(UpdateDepartmentParams {
            id: "missing".to_string(),
            name: Some("Ghost".to_string()),
            location: None,
            timezone: None,
            wfa_policy: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
