use super::*;

/// Tests collecting distinct users with attendance in a range.
///
/// Expected: Ok with each attending user once
#[tokio::test]
async fn returns_distinct_user_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Attendance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let present = factory::create_user(db).await?;
    factory::create_user(db).await?;
    let time = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();

    factory::attendance::AttendanceFactory::new(db, &present.id)
        .time(time)
        .build()
        .await?;
    factory::attendance::AttendanceFactory::new(db, &present.id)
        .attendance_type("check_out")
        .time(time + chrono::Duration::hours(8))
        .build()
        .await?;

    let start = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();
    let repo = AttendanceRepository::new(db);
    let ids = repo
        .user_ids_between(start, start + chrono::Duration::days(1))
        .await?;

    assert_eq!(ids.len(), 1);
    assert!(ids.contains(&present.id));

    Ok(())
}
