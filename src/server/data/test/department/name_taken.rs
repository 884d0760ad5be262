use super::*;

/// Tests duplicate name detection with and without an excepted department.
///
/// Expected: taken for others, free for the holder itself
#[tokio::test]
async fn detects_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Department).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::department::DepartmentFactory::new(db)
        .name("Legal")
        .build()
        .await?;

    let repo = DepartmentRepository::new(db);

    assert!(repo.name_taken("Legal", None).await?);
    assert!(!repo.name_taken("Legal", Some(&department.id)).await?);
    assert!(!repo.name_taken("Marketing", None).await?);

    Ok(())
}
