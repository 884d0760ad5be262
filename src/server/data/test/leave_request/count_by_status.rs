use super::*;

/// Tests counting requests per status across all users.
///
/// Expected: two pending, one approved, zero rejected
#[tokio::test]
async fn counts_each_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(LeaveRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::create_user(db).await?;
    let user2 = factory::create_user(db).await?;

    factory::create_leave_request(db, &user1.id).await?;
    factory::create_leave_request(db, &user2.id).await?;
    factory::leave_request::LeaveRequestFactory::new(db, &user2.id)
        .status("approved")
        .build()
        .await?;

    let repo = LeaveRequestRepository::new(db);

    assert_eq!(repo.count_by_status(LeaveStatus::Pending).await?, 2);
    assert_eq!(repo.count_by_status(LeaveStatus::Approved).await?, 1);
    assert_eq!(repo.count_by_status(LeaveStatus::Rejected).await?, 0);

    Ok(())
}
