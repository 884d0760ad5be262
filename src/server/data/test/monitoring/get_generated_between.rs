use super::*;

/// Tests selecting reports for an export window.
///
/// Expected: Ok with reports at or after start and before end, oldest first
#[tokio::test]
async fn selects_reports_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(MonitoringReport)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap();

    for generated_at in [
        start - Duration::seconds(1),
        start + Duration::hours(8),
        start,
        end,
    ] {
        factory::monitoring_report::MonitoringReportFactory::new(db)
            .generated_at(generated_at)
            .build()
            .await?;
    }

    let repo = MonitoringRepository::new(db);
    let reports = repo.get_generated_between(start, end).await?;

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].generated_at, start);
    assert!(reports[0].summary().is_ok());

    Ok(())
}
