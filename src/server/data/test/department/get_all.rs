use super::*;

/// Tests listing departments ordered by name and loading a subset by ID.
///
/// Expected: Ok with alphabetical ordering
#[tokio::test]
async fn lists_departments_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Department).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sales = factory::department::DepartmentFactory::new(db)
        .name("Sales")
        .build()
        .await?;
    let admin = factory::department::DepartmentFactory::new(db)
        .name("Administration")
        .build()
        .await?;

    let repo = DepartmentRepository::new(db);
    let all = repo.get_all().await?;
    let subset = repo.get_by_ids(&[sales.id.clone()]).await?;

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, admin.id);
    assert_eq!(all[1].id, sales.id);
    assert_eq!(subset.len(), 1);
    assert_eq!(subset[0].name, "Sales");

    Ok(())
}
