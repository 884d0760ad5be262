//! Monitoring report factory for creating stored report snapshots.

use crate::factory::helpers::new_uuid;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating stored monitoring reports.
pub struct MonitoringReportFactory<'a> {
    db: &'a DatabaseConnection,
    report_type: String,
    data: String,
    generated_at: DateTime<Utc>,
}

impl<'a> MonitoringReportFactory<'a> {
    /// Creates a new MonitoringReportFactory with default values.
    ///
    /// Defaults:
    /// - report_type: `"daily"`
    /// - data: an all-zero summary in JSON
    /// - generated_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let now = Utc::now();
        let data = serde_json::json!({
            "date": now.date_naive(),
            "total_users": 0,
            "active_users": 0,
            "total_check_in": 0,
            "total_check_out": 0,
            "pending_leaves": 0,
            "approved_leaves": 0,
            "rejected_leaves": 0,
            "generated_at": now,
        });
        Self {
            db,
            report_type: "daily".to_string(),
            data: data.to_string(),
            generated_at: now,
        }
    }

    pub fn report_type(mut self, report_type: impl Into<String>) -> Self {
        self.report_type = report_type.into();
        self
    }

    /// Sets the raw JSON payload stored in the report.
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    pub fn generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub async fn build(self) -> Result<entity::monitoring_report::Model, DbErr> {
        entity::monitoring_report::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            report_type: ActiveValue::Set(self.report_type),
            data: ActiveValue::Set(self.data),
            generated_at: ActiveValue::Set(self.generated_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a daily report with an all-zero summary.
pub async fn create_monitoring_report(
    db: &DatabaseConnection,
) -> Result<entity::monitoring_report::Model, DbErr> {
    MonitoringReportFactory::new(db).build().await
}
