use super::*;

/// Tests that new notifications are stored unread.
///
/// Expected: Ok with unread status and the given send time
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let send_at = Utc::now() + Duration::hours(1);

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParams {
            user_id: user.id.clone(),
            notification_type: NotificationType::Reminder,
            message: "Shift starts soon".to_string(),
            send_at,
        })
        .await?;

    assert_eq!(notification.status, NotificationStatus::Unread);
    assert_eq!(notification.notification_type, NotificationType::Reminder);
    assert_eq!(notification.send_at, send_at);

    Ok(())
}
