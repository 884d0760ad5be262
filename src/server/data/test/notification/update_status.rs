use super::*;

/// Tests marking a notification as read and deleting it.
///
/// Expected: Ok(Some) with read status, then the row is gone
#[tokio::test]
async fn marks_read_and_deletes() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, &user.id).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo
        .update_status(&notification.id, NotificationStatus::Read)
        .await?
        .unwrap();

    assert_eq!(updated.status, NotificationStatus::Read);
    assert_eq!(updated.message, notification.message);

    assert!(repo.delete(&notification.id).await?);
    assert!(repo
        .update_status(&notification.id, NotificationStatus::Unread)
        .await?
        .is_none());

    Ok(())
}
