use super::*;

/// Tests that listings are newest first and filterable by user.
///
/// Expected: Ok with only the user's events, latest first
#[tokio::test]
async fn filters_by_user_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Attendance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let early = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2025, 3, 10, 17, 0, 0).unwrap();

    factory::attendance::AttendanceFactory::new(db, &user.id)
        .time(early)
        .build()
        .await?;
    factory::attendance::AttendanceFactory::new(db, &user.id)
        .attendance_type("check_out")
        .time(late)
        .build()
        .await?;
    factory::create_attendance(db, &other.id).await?;

    let repo = AttendanceRepository::new(db);
    let page = repo
        .get_paginated(
            AttendanceFilter {
                user_id: Some(user.id.clone()),
                ..Default::default()
            },
            PageParams::default(),
        )
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.items[0].time, late);
    assert_eq!(page.items[1].time, early);

    Ok(())
}

/// Tests the day and type filters.
///
/// The day filter covers one UTC day; events on the next day are excluded.
///
/// Expected: Ok with the single matching check-out
#[tokio::test]
async fn filters_by_date_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Attendance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    factory::attendance::AttendanceFactory::new(db, &user.id)
        .time(Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap())
        .build()
        .await?;
    factory::attendance::AttendanceFactory::new(db, &user.id)
        .attendance_type("check_out")
        .time(Utc.with_ymd_and_hms(2025, 3, 10, 23, 59, 0).unwrap())
        .build()
        .await?;
    factory::attendance::AttendanceFactory::new(db, &user.id)
        .attendance_type("check_out")
        .time(Utc.with_ymd_and_hms(2025, 3, 11, 0, 0, 0).unwrap())
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);
    let page = repo
        .get_paginated(
            AttendanceFilter {
                user_id: None,
                date: NaiveDate::from_ymd_opt(2025, 3, 10),
                attendance_type: Some(AttendanceType::CheckOut),
            },
            PageParams::default(),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].attendance_type, AttendanceType::CheckOut);

    Ok(())
}

/// Tests paging metadata across multiple pages.
///
/// Expected: Ok with three pages of size two for five events
#[tokio::test]
async fn reports_paging_metadata() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Attendance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for _ in 0..5 {
        factory::create_attendance(db, &user.id).await?;
    }

    let repo = AttendanceRepository::new(db);
    let page = repo
        .get_paginated(AttendanceFilter::default(), PageParams::new(Some(3), Some(2)))
        .await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 3);
    assert_eq!(page.items.len(), 1);

    Ok(())
}
