use super::*;

/// Tests finding a live user by ID.
///
/// Expected: Ok(Some) with matching user
#[tokio::test]
async fn finds_live_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(&user.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().email, user.email);

    Ok(())
}

/// Tests that soft-deleted users are not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .deleted_at(Some(chrono::Utc::now()))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(&user.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a stored role outside the known set surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("superuser")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(&user.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
