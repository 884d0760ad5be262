use super::*;

/// Tests recording logs and reading them back newest first.
///
/// Expected: Ok with only the device's logs
#[tokio::test]
async fn records_and_lists_logs() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let device = factory::create_device(db).await?;
    let other = factory::create_device(db).await?;
    factory::device::create_device_log(db, &other.id, "restart").await?;

    let repo = DeviceRepository::new(db);
    let log = repo
        .create_log(CreateDeviceLogParams {
            device_id: device.id.clone(),
            employee_id: Some("employee-1".to_string()),
            action: "scan".to_string(),
            description: "badge accepted".to_string(),
        })
        .await?;

    let logs = repo.get_logs(&device.id).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0], log);
    assert_eq!(logs[0].employee_id.as_deref(), Some("employee-1"));

    Ok(())
}

/// Tests stamping the time a device last reported in.
///
/// Expected: last_check equals the given time
#[tokio::test]
async fn touches_last_check() -> Result<(), DbErr> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let device = factory::create_device(db).await?;
    let at = chrono::Utc::now();

    let repo = DeviceRepository::new(db);
    repo.touch_last_check(&device.id, at).await?;

    let found = repo.find_by_id(&device.id).await?.unwrap();
    assert_eq!(found.last_check, Some(at));

    Ok(())
}
