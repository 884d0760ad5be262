use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000007_create_schedules_table::Schedules;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScheduleSwapRequests::Table)
                    .if_not_exists()
                    .col(string(ScheduleSwapRequests::Id).primary_key())
                    .col(string(ScheduleSwapRequests::RequesterId))
                    .col(string(ScheduleSwapRequests::ScheduleId1))
                    .col(string(ScheduleSwapRequests::ScheduleId2))
                    .col(string(ScheduleSwapRequests::Status))
                    .col(
                        timestamp_with_time_zone(ScheduleSwapRequests::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_swap_requests_schedule_id_1")
                            .from(
                                ScheduleSwapRequests::Table,
                                ScheduleSwapRequests::ScheduleId1,
                            )
                            .to(Schedules::Table, Schedules::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_swap_requests_schedule_id_2")
                            .from(
                                ScheduleSwapRequests::Table,
                                ScheduleSwapRequests::ScheduleId2,
                            )
                            .to(Schedules::Table, Schedules::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScheduleSwapRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScheduleSwapRequests {
    Table,
    Id,
    RequesterId,
    #[sea_orm(iden = "schedule_id_1")]
    ScheduleId1,
    #[sea_orm(iden = "schedule_id_2")]
    ScheduleId2,
    Status,
    CreatedAt,
}
