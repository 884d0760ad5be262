//! Monitoring report data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::new_id,
    model::monitoring::{CreateReportParams, MonitoringReport},
};

pub struct MonitoringRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonitoringRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a generated report.
    pub async fn create(&self, params: CreateReportParams) -> Result<MonitoringReport, DbErr> {
        let entity = entity::monitoring_report::ActiveModel {
            id: ActiveValue::Set(new_id()),
            report_type: ActiveValue::Set(params.report_type),
            data: ActiveValue::Set(params.data),
            generated_at: ActiveValue::Set(params.generated_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(MonitoringReport::from_entity(entity))
    }

    /// Gets every stored report, newest first.
    pub async fn get_all(&self) -> Result<Vec<MonitoringReport>, DbErr> {
        let entities = entity::prelude::MonitoringReport::find()
            .order_by_desc(entity::monitoring_report::Column::GeneratedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MonitoringReport::from_entity)
            .collect())
    }

    /// Gets reports generated in the half-open range `[start, end)`, oldest first.
    pub async fn get_generated_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<MonitoringReport>, DbErr> {
        let entities = entity::prelude::MonitoringReport::find()
            .filter(entity::monitoring_report::Column::GeneratedAt.gte(start))
            .filter(entity::monitoring_report::Column::GeneratedAt.lt(end))
            .order_by_asc(entity::monitoring_report::Column::GeneratedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MonitoringReport::from_entity)
            .collect())
    }
}
