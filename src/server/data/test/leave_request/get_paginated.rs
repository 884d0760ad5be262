use super::*;

/// Tests filtering leave requests by owner and status.
///
/// Expected: Ok with only the owner's pending request
#[tokio::test]
async fn filters_by_user_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(LeaveRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let pending = factory::create_leave_request(db, &user.id).await?;
    factory::leave_request::LeaveRequestFactory::new(db, &user.id)
        .status("approved")
        .build()
        .await?;
    factory::create_leave_request(db, &other.id).await?;

    let repo = LeaveRequestRepository::new(db);
    let page = repo
        .get_paginated(
            LeaveFilter {
                user_id: Some(user.id.clone()),
                status: Some(LeaveStatus::Pending),
            },
            PageParams::default(),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, pending.id);

    let everyone = repo
        .get_paginated(LeaveFilter::default(), PageParams::default())
        .await?;
    assert_eq!(everyone.total, 3);

    Ok(())
}
