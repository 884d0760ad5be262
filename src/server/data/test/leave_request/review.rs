use super::*;

/// Tests rejecting a request with a reviewer note.
///
/// Expected: Ok(Some) with status, reviewer, review time and note set
#[tokio::test]
async fn records_rejection_with_note() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(LeaveRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let reviewer = factory::user::UserFactory::new(db).role("hr").build().await?;
    let request = factory::create_leave_request(db, &user.id).await?;

    let repo = LeaveRequestRepository::new(db);
    let reviewed = repo
        .review(ReviewLeaveParams {
            id: request.id.clone(),
            status: LeaveStatus::Rejected,
            reviewed_by: reviewer.id.clone(),
            note: Some("peak season".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(reviewed.status, LeaveStatus::Rejected);
    assert_eq!(reviewed.reviewed_by, Some(reviewer.id));
    assert!(reviewed.reviewed_at.is_some());
    assert_eq!(reviewed.note.as_deref(), Some("peak season"));

    Ok(())
}

/// Tests reviewing a request that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(LeaveRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeaveRequestRepository::new(db);
    let result = repo
        .review(ReviewLeaveParams {
            id: "missing".to_string(),
            status: LeaveStatus::Approved,
            reviewed_by: "reviewer".to_string(),
            note: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests reviewing a request that has already been reviewed.
///
/// Expected: Ok(None) and the first outcome kept
#[tokio::test]
async fn ignores_request_no_longer_pending() -> Result<(), DbErr> {
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
    let first = repo
        .review(ReviewLeaveParams {
            id: request.id.clone(),
            status: LeaveStatus::Approved,
            reviewed_by: "first".to_string(),
            note: None,
        })
        .await?;
    let second = repo
        .review(ReviewLeaveParams {
            id: request.id.clone(),
            status: LeaveStatus::Rejected,
            reviewed_by: "second".to_string(),
            note: Some("late".to_string()),
        })
        .await?;

    assert!(first.is_some());
    assert!(second.is_none());

    let stored = repo.find_by_id(&request.id).await?.unwrap();
    assert_eq!(stored.status, LeaveStatus::Approved);
    assert_eq!(stored.reviewed_by.as_deref(), Some("first"));
    assert_eq!(stored.note, None);

    Ok(())
}
