use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError, model::monitoring::MonitoringReport, service::monitoring::MonitoringService,
};

/// Starts the daily monitoring report scheduler
///
/// Every run computes the current day's monitoring summary and stores it as a `daily`
/// report. A failed run is logged and the scheduler keeps going.
///
/// # Arguments
/// - `db`: Database connection
/// - `cron`: Six-field cron expression (seconds first) controlling when reports run
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; keep it alive for as long as jobs should fire
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler(db: DatabaseConnection, cron: &str) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = run_daily_report(&db).await {
                tracing::error!("Error generating daily monitoring report: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Monitoring report scheduler started with schedule {}", cron);

    Ok(scheduler)
}

/// Generates and stores one daily report.
///
/// Shared by the scheduled job and the `report` command.
pub async fn run_daily_report(db: &DatabaseConnection) -> Result<MonitoringReport, AppError> {
    MonitoringService::new(db).generate_daily_report().await
}
