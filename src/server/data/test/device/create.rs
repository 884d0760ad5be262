use super::*;

/// Tests registering a device and listing devices by name.
///
/// Expected: Ok with the device stored and no last check yet
#[tokio::test]
async fn creates_and_lists_devices() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::device::DeviceFactory::new(db)
        .name("Warehouse reader")
        .build()
        .await?;

    let repo = DeviceRepository::new(db);
    let device = repo
        .create(CreateDeviceParams {
            name: "Front door".to_string(),
            device_type: DeviceType::Rfid,
            location: "Lobby".to_string(),
            status: DeviceStatus::Active,
        })
        .await?;

    assert_eq!(device.device_type, DeviceType::Rfid);
    assert!(device.last_check.is_none());

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, device.id);

    Ok(())
}
