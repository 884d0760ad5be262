use super::*;

/// Tests storing reports and listing them newest first.
///
/// Expected: Ok with the later report first
#[tokio::test]
async fn stores_and_lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(MonitoringReport)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::monitoring_report::MonitoringReportFactory::new(db)
        .generated_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = MonitoringRepository::new(db);
    let report = repo
        .create(CreateReportParams {
            report_type: DAILY_REPORT_TYPE.to_string(),
            data: "{}".to_string(),
            generated_at: now,
        })
        .await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, report.id);

    Ok(())
}
