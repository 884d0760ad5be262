use super::*;

/// Tests deactivating a device and deleting it.
///
/// Expected: Ok(Some) with inactive status, then the row is gone
#[tokio::test]
async fn updates_and_deletes_device() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let device = factory::create_device(db).await?;

    let repo = DeviceRepository::new(db);
    let updated = repo
        .update(UpdateDeviceParams {
            id: device.id.clone(),
            status: Some(DeviceStatus::Inactive),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.status, DeviceStatus::Inactive);
    assert_eq!(updated.name, device.name);

    assert!(repo.delete(&device.id).await?);
    assert!(repo.find_by_id(&device.id).await?.is_none());

    Ok(())
}
