use super::*;

/// Tests loading the password hash for login.
///
/// Expected: Ok(Some) with the stored hash
#[tokio::test]
async fn returns_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("login@example.com")
        .password("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo
        .find_credentials_by_email("login@example.com")
        .await?
        .unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, "stored-hash");

    Ok(())
}

/// Tests that unknown and deleted emails both produce no credentials.
///
/// Expected: Ok(None) for each
#[tokio::test]
async fn returns_none_for_unknown_or_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("gone@example.com")
        .deleted_at(Some(chrono::Utc::now()))
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo
        .find_credentials_by_email("missing@example.com")
        .await?
        .is_none());
    assert!(repo
        .find_credentials_by_email("gone@example.com")
        .await?
        .is_none());

    Ok(())
}
