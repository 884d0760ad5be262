use super::*;

/// Tests that an email held by another user is reported as taken.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_taken_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("taken@example.com", None).await?);
    assert!(!repo.email_taken("free@example.com", None).await?);

    Ok(())
}

/// Tests that a user keeping their own email is not a conflict.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_excepted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("self@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(!repo.email_taken("self@example.com", Some(&user.id)).await?);

    Ok(())
}

/// Tests that deleted users still hold their email.
///
/// Expected: Ok(true)
#[tokio::test]
async fn counts_deleted_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("deleted@example.com")
        .deleted_at(Some(chrono::Utc::now()))
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("deleted@example.com", None).await?);

    Ok(())
}
