use super::*;

/// Tests finding the next upcoming shift.
///
/// Past shifts are skipped and the earliest remaining shift is returned.
///
/// Expected: Ok(Some) with the shift on the reference date
#[tokio::test]
async fn finds_earliest_upcoming_shift() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    for day in [9, 14, 10] {
        factory::schedule::ScheduleFactory::new(db, &user.id)
            .date(date(2025, 3, day))
            .build()
            .await?;
    }

    let repo = ScheduleRepository::new(db);
    let next = repo
        .find_next_for_user(&user.id, date(2025, 3, 10))
        .await?
        .unwrap();

    assert_eq!(next.date, date(2025, 3, 10));
    assert!(repo
        .find_next_for_user(&user.id, date(2025, 3, 15))
        .await?
        .is_none());

    Ok(())
}

/// Tests looking up the shift that decides whether a check-in is late.
///
/// Expected: Ok(Some) on a scheduled date and Ok(None) otherwise
#[tokio::test]
async fn finds_shift_on_date() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::schedule::ScheduleFactory::new(db, &user.id)
        .date(date(2025, 3, 10))
        .shift(time(7, 30), time(15, 30))
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);
    let shift = repo
        .find_by_user_and_date(&user.id, date(2025, 3, 10))
        .await?
        .unwrap();

    assert_eq!(shift.shift_start, time(7, 30));
    assert!(repo
        .find_by_user_and_date(&user.id, date(2025, 3, 11))
        .await?
        .is_none());

    Ok(())
}
