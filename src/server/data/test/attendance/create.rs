use super::*;

/// Tests recording a check-in.
///
/// Expected: Ok with every field persisted
#[tokio::test]
async fn creates_attendance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Attendance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let time = Utc.with_ymd_and_hms(2025, 3, 10, 8, 5, 0).unwrap();

    let repo = AttendanceRepository::new(db);
    let attendance = repo
        .create(CreateAttendanceParams {
            user_id: user.id.clone(),
            attendance_type: AttendanceType::CheckIn,
            time,
            latitude: 1.5,
            longitude: 103.8,
            selfie_url: "https://example.com/a.jpg".to_string(),
            notes: Some("gate B".to_string()),
            status: AttendanceStatus::Late,
        })
        .await?;

    let found = repo.find_by_id(&attendance.id).await?.unwrap();
    assert_eq!(found.user_id, user.id);
    assert_eq!(found.time, time);
    assert_eq!(found.attendance_type, AttendanceType::CheckIn);
    assert_eq!(found.status, AttendanceStatus::Late);
    assert_eq!(found.notes.as_deref(), Some("gate B"));

    Ok(())
}
