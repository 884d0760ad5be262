use super::*;

/// Tests replacing a schedule's fields and deleting it.
///
/// Expected: Ok(Some) with the new shift, then the row is gone
#[tokio::test]
async fn replaces_and_deletes_schedule() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let schedule = factory::create_schedule(db, &user.id).await?;

    let repo = ScheduleRepository::new(db);
    let updated = repo
        .update(UpdateScheduleParams {
            id: schedule.id.clone(),
            date: date(2025, 3, 20),
            shift_start: time(13, 0),
            shift_end: time(21, 0),
            break_start: None,
            break_end: None,
            work_location_id: None,
            schedule_type: ScheduleType::Remote,
        })
        .await?
        .unwrap();

    assert_eq!(updated.date, date(2025, 3, 20));
    assert_eq!(updated.shift_end, time(21, 0));
    assert_eq!(updated.schedule_type, ScheduleType::Remote);

    assert!(repo.delete(&schedule.id).await?);
    assert!(repo.find_by_id(&schedule.id).await?.is_none());

    Ok(())
}
