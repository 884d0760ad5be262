use super::*;

/// Tests selecting the approved requests that count against a yearly balance.
///
/// Creates approved, pending, other-type and previous-year requests; only the
/// approved annual request starting in the year should match.
///
/// Expected: Ok with one request
#[tokio::test]
async fn selects_approved_requests_of_type_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(LeaveRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let counted = factory::leave_request::LeaveRequestFactory::new(db, &user.id)
        .dates(date(2025, 2, 3), date(2025, 2, 5))
        .status("approved")
        .build()
        .await?;
    factory::leave_request::LeaveRequestFactory::new(db, &user.id)
        .dates(date(2025, 3, 3), date(2025, 3, 3))
        .build()
        .await?;
    factory::leave_request::LeaveRequestFactory::new(db, &user.id)
        .leave_type("sick")
        .dates(date(2025, 5, 1), date(2025, 5, 1))
        .status("approved")
        .build()
        .await?;
    factory::leave_request::LeaveRequestFactory::new(db, &user.id)
        .dates(date(2024, 12, 30), date(2025, 1, 2))
        .status("approved")
        .build()
        .await?;

    let repo = LeaveRequestRepository::new(db);
    let requests = repo
        .get_approved_starting_between(
            &user.id,
            LeaveType::Annual,
            date(2025, 1, 1),
            date(2025, 12, 31),
        )
        .await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, counted.id);

    Ok(())
}
