use super::*;

/// Tests listing one user's notifications newest first.
///
/// Expected: Ok with the user's notifications ordered by send time
#[tokio::test]
async fn lists_users_notifications_newest_first() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();

    let older = factory::notification::NotificationFactory::new(db, &user.id)
        .send_at(now - Duration::days(1))
        .build()
        .await?;
    let newer = factory::notification::NotificationFactory::new(db, &user.id)
        .send_at(now)
        .build()
        .await?;
    factory::create_notification(db, &other.id).await?;

    let repo = NotificationRepository::new(db);
    let page = repo
        .get_paginated_by_user(&user.id, PageParams::default())
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.items[0].id, newer.id);
    assert_eq!(page.items[1].id, older.id);

    Ok(())
}
