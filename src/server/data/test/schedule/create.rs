use super::*;

/// Tests creating a schedule with a break and a work location.
///
/// Expected: Ok with every field persisted
#[tokio::test]
async fn creates_schedule() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let location = factory::create_work_location(db).await?;

    let repo = ScheduleRepository::new(db);
    let schedule = repo
        .create(CreateScheduleParams {
            user_id: user.id.clone(),
            date: date(2025, 3, 10),
            shift_start: time(8, 0),
            shift_end: time(17, 0),
            break_start: Some(time(12, 0)),
            break_end: Some(time(13, 0)),
            work_location_id: Some(location.id.clone()),
            schedule_type: ScheduleType::Hybrid,
        })
        .await?;

    let found = repo.find_by_id(&schedule.id).await?.unwrap();
    assert_eq!(found.shift_start, time(8, 0));
    assert_eq!(found.break_end, Some(time(13, 0)));
    assert_eq!(found.work_location_id, Some(location.id));
    assert_eq!(found.schedule_type, ScheduleType::Hybrid);

    Ok(())
}
