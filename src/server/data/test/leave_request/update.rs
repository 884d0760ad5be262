use super::*;

/// Tests a partial update of a request's dates followed by deletion.
///
/// Expected: Ok(Some) with new dates and the original type, then the row is gone
#[tokio::test]
async fn updates_and_deletes_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(LeaveRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let request = factory::create_leave_request(db, &user.id).await?;

    let repo = LeaveRequestRepository::new(db);
    let updated = repo
        .update(UpdateLeaveParams {
            id: request.id.clone(),
            start_date: Some(date(2025, 6, 2)),
            end_date: Some(date(2025, 6, 6)),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.start_date, date(2025, 6, 2));
    assert_eq!(updated.end_date, date(2025, 6, 6));
    assert_eq!(updated.leave_type, LeaveType::Annual);

    assert!(repo.delete(&request.id).await?);
    assert!(repo.find_by_id(&request.id).await?.is_none());

    Ok(())
}
