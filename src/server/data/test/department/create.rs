use super::*;

/// Tests creating a department with a work-from-anywhere policy.
///
/// Expected: Ok with the policy stored as JSON
#[tokio::test]
async fn creates_department_with_policy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Department).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);
    let department = repo
        .create(CreateDepartmentParams {
            name: "Finance".to_string(),
            location: "HQ".to_string(),
            timezone: "UTC".to_string(),
            wfa_policy: Some(serde_json::json!({ "days_per_week": 2 })),
        })
        .await?;

    assert_eq!(department.name, "Finance");
    let found = repo.find_by_name("Finance").await?.unwrap();
    assert_eq!(found.id, department.id);
    assert_eq!(
        found.wfa_policy,
        Some(serde_json::json!({ "days_per_week": 2 }))
    );

    Ok(())
}
