use super::*;

/// Tests a partial attendance update and deletion.
///
/// Expected: Ok(Some) with the new status and notes, then the row is gone
#[tokio::test]
async fn updates_and_deletes_attendance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Attendance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let attendance = factory::create_attendance(db, &user.id).await?;

    let repo = AttendanceRepository::new(db);
    let updated = repo
        .update(UpdateAttendanceParams {
            id: attendance.id.clone(),
            status: Some(AttendanceStatus::Absent),
            notes: Some("sick".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.status, AttendanceStatus::Absent);
    assert_eq!(updated.notes.as_deref(), Some("sick"));
    assert_eq!(updated.selfie_url, attendance.selfie_url);

    assert!(repo.delete(&attendance.id).await?);
    assert!(repo.find_by_id(&attendance.id).await?.is_none());
    assert!(repo
        .update(UpdateAttendanceParams {
            id: attendance.id,
            ..Default::default()
        })
        .await?
        .is_none());

    Ok(())
}
