use super::*;

/// Tests the inclusive date range used by the monthly calendar.
///
/// Expected: Ok with shifts on both boundary dates and none outside
#[tokio::test]
async fn includes_both_boundaries() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    for (month, day) in [(2, 28), (3, 1), (3, 31), (4, 1)] {
        factory::schedule::ScheduleFactory::new(db, &user.id)
            .date(date(2025, month, day))
            .build()
            .await?;
    }

    let repo = ScheduleRepository::new(db);
    let march = repo
        .get_for_user_between(&user.id, date(2025, 3, 1), date(2025, 3, 31))
        .await?;

    assert_eq!(march.len(), 2);
    assert_eq!(march[0].date, date(2025, 3, 1));
    assert_eq!(march[1].date, date(2025, 3, 31));

    Ok(())
}
