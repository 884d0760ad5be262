use super::*;

/// Tests a partial work location update followed by deletion.
///
/// Expected: Ok(Some) with the new name, then the row is gone
#[tokio::test]
async fn updates_and_deletes_work_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(WorkLocation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_work_location(db).await?;

    let repo = WorkLocationRepository::new(db);
    let updated = repo
        .update(UpdateWorkLocationParams {
            id: location.id.clone(),
            name: Some("Renamed".to_string()),
            address: None,
            city: None,
            state: None,
            country: None,
            postal_code: None,
            timezone: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.city, location.city);

    assert!(repo.delete(&location.id).await?);
    assert!(repo.find_by_id(&location.id).await?.is_none());

    Ok(())
}
