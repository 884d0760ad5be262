use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonitoringReports::Table)
                    .if_not_exists()
                    .col(string(MonitoringReports::Id).primary_key())
                    .col(string(MonitoringReports::ReportType))
                    .col(text(MonitoringReports::Data))
                    .col(timestamp_with_time_zone(MonitoringReports::GeneratedAt))
                    .col(
                        timestamp_with_time_zone(MonitoringReports::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_monitoring_reports_generated_at")
                    .table(MonitoringReports::Table)
                    .col(MonitoringReports::GeneratedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonitoringReports::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MonitoringReports {
    Table,
    Id,
    ReportType,
    Data,
    GeneratedAt,
    CreatedAt,
}
