use super::*;

/// Tests the half-open time range used by attendance history.
///
/// Expected: Ok with events at or after start and before end, oldest first
#[tokio::test]
async fn returns_events_in_range_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Attendance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap();

    for time in [
        Utc.with_ymd_and_hms(2025, 3, 1, 17, 0, 0).unwrap(),
        start,
        end,
    ] {
        factory::attendance::AttendanceFactory::new(db, &user.id)
            .time(time)
            .build()
            .await?;
    }

    let repo = AttendanceRepository::new(db);
    let events = repo.get_by_user_between(&user.id, start, end).await?;
    let all = repo.get_between(start, end).await?;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].time, start);
    assert_eq!(all.len(), 2);

    Ok(())
}
