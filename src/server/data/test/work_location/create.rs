use super::*;

/// Tests creating a work location and checking its existence.
///
/// Expected: Ok with the location listed and reported as existing
#[tokio::test]
async fn creates_work_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(WorkLocation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WorkLocationRepository::new(db);
    let location = repo
        .create(CreateWorkLocationParams {
            name: "Surabaya Branch".to_string(),
            address: "Jl. Pemuda 1".to_string(),
            city: "Surabaya".to_string(),
            state: "East Java".to_string(),
            country: "Indonesia".to_string(),
            postal_code: "60271".to_string(),
            timezone: "Asia/Jakarta".to_string(),
        })
        .await?;

    assert_eq!(location.city, "Surabaya");
    assert!(repo.exists(&location.id).await?);
    assert!(!repo.exists("missing").await?);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
