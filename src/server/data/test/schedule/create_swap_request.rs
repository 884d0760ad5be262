use super::*;

/// Tests recording a pending swap request between two shifts.
///
/// Expected: Ok with pending status and both schedule IDs
#[tokio::test]
async fn records_pending_swap() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let mine = factory::create_schedule(db, &user.id).await?;
    let theirs = factory::create_schedule(db, &other.id).await?;

    let repo = ScheduleRepository::new(db);
    let swap = repo
        .create_swap_request(&user.id, &mine.id, &theirs.id)
        .await?;

    assert_eq!(swap.requester_id, user.id);
    assert_eq!(swap.schedule_id_1, mine.id);
    assert_eq!(swap.schedule_id_2, theirs.id);
    assert_eq!(swap.status, SWAP_STATUS_PENDING);

    Ok(())
}
