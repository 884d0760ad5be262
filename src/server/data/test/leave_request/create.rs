use super::*;

/// Tests that new leave requests start pending and unreviewed.
///
/// Expected: Ok with pending status and no reviewer
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(LeaveRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = LeaveRequestRepository::new(db);
    let request = repo
        .create(CreateLeaveParams {
            user_id: user.id.clone(),
            leave_type: LeaveType::Sick,
            start_date: date(2025, 4, 1),
            end_date: date(2025, 4, 2),
            reason: "flu".to_string(),
        })
        .await?;

    assert_eq!(request.status, LeaveStatus::Pending);
    assert_eq!(request.leave_type, LeaveType::Sick);
    assert!(request.reviewed_by.is_none());
    assert!(request.reviewed_at.is_none());
    assert_eq!(repo.find_by_id(&request.id).await?.unwrap(), request);

    Ok(())
}
