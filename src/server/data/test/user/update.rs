use super::*;

/// Tests a partial update that leaves omitted fields untouched.
///
/// Expected: Ok(Some) with only the given fields changed
#[tokio::test]
async fn updates_given_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            id: user.id.clone(),
            full_name: Some("Renamed".to_string()),
            role: Some(UserRole::Manager),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.full_name, "Renamed");
    assert_eq!(updated.role, UserRole::Manager);
    assert_eq!(updated.email, user.email);
    assert!(updated.updated_at >= user.updated_at);

    Ok(())
}

/// Tests that a new password hash replaces the stored one.
///
/// Expected: credentials lookup returns the new hash
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update(UpdateUserParams {
        id: user.id.clone(),
        password_hash: Some("new-hash".to_string()),
        ..Default::default()
    })
    .await?;

    let credentials = repo
        .find_credentials_by_email(&user.email)
        .await?
        .unwrap();
    assert_eq!(credentials.password_hash, "new-hash");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(UpdateUserParams {
            id: "missing".to_string(),
            full_name: Some("Nobody".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
