use super::*;

/// Tests counting check-ins and check-outs separately within a day.
///
/// Expected: two check-ins and one check-out
#[tokio::test]
async fn counts_each_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Attendance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::create_user(db).await?;
    let user2 = factory::create_user(db).await?;
    let morning = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();

    for user_id in [&user1.id, &user2.id] {
        factory::attendance::AttendanceFactory::new(db, user_id)
            .time(morning)
            .build()
            .await?;
    }
    factory::attendance::AttendanceFactory::new(db, &user1.id)
        .attendance_type("check_out")
        .time(morning + chrono::Duration::hours(9))
        .build()
        .await?;

    let start = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();
    let end = start + chrono::Duration::days(1);

    let repo = AttendanceRepository::new(db);

    assert_eq!(
        repo.count_by_type_between(AttendanceType::CheckIn, start, end)
            .await?,
        2
    );
    assert_eq!(
        repo.count_by_type_between(AttendanceType::CheckOut, start, end)
            .await?,
        1
    );

    Ok(())
}
