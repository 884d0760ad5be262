use super::*;

/// Tests listing schedules by date, optionally for one user.
///
/// Expected: Ok with date ordering and user filtering
#[tokio::test]
async fn lists_by_date_with_optional_user() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::schedule::ScheduleFactory::new(db, &user.id)
        .date(date(2025, 3, 12))
        .build()
        .await?;
    factory::schedule::ScheduleFactory::new(db, &user.id)
        .date(date(2025, 3, 10))
        .build()
        .await?;
    factory::schedule::ScheduleFactory::new(db, &other.id)
        .date(date(2025, 3, 11))
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);
    let all = repo.get_all(None).await?;
    let mine = repo.get_all(Some(&user.id)).await?;

    let dates: Vec<_> = all.iter().map(|s| s.date).collect();
    assert_eq!(
        dates,
        vec![date(2025, 3, 10), date(2025, 3, 11), date(2025, 3, 12)]
    );
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|s| s.user_id == user.id));

    Ok(())
}
