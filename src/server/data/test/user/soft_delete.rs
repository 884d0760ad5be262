use super::*;

/// Tests that soft deletion keeps the row but hides the user.
///
/// Verifies that `deleted_at` is stamped, the status becomes inactive and that
/// a second delete reports nothing to delete.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn soft_deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.soft_delete(&user.id).await?);
    assert!(!repo.soft_delete(&user.id).await?);
    assert!(repo.find_by_id(&user.id).await?.is_none());

    let row = entity::prelude::User::find_by_id(user.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert!(row.deleted_at.is_some());
    assert_eq!(row.status, UserStatus::Inactive.as_str());

    Ok(())
}
