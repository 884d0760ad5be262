use super::*;

/// Tests batch loading users while skipping deleted and unknown IDs.
///
/// Expected: Ok with only the live requested user
#[tokio::test]
async fn loads_live_users_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::create_user(db).await?;
    let deleted = factory::user::UserFactory::new(db)
        .deleted_at(Some(chrono::Utc::now()))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let users = repo
        .get_by_ids(&[live.id.clone(), deleted.id, "missing".to_string()])
        .await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, live.id);
    assert!(repo.get_by_ids(&[]).await?.is_empty());

    Ok(())
}
