use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_users_table::Users,
    m20250301_000004_create_work_locations_table::WorkLocations,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedules::Table)
                    .if_not_exists()
                    .col(string(Schedules::Id).primary_key())
                    .col(string(Schedules::UserId))
                    .col(date(Schedules::Date))
                    .col(time(Schedules::ShiftStart))
                    .col(time(Schedules::ShiftEnd))
                    .col(time_null(Schedules::BreakStart))
                    .col(time_null(Schedules::BreakEnd))
                    .col(string_null(Schedules::WorkLocationId))
                    .col(string(Schedules::ScheduleType))
                    .col(
                        timestamp_with_time_zone(Schedules::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Schedules::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_user_id")
                            .from(Schedules::Table, Schedules::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_work_location_id")
                            .from(Schedules::Table, Schedules::WorkLocationId)
                            .to(WorkLocations::Table, WorkLocations::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedules_user_id_date")
                    .table(Schedules::Table)
                    .col(Schedules::UserId)
                    .col(Schedules::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedules::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedules {
    Table,
    Id,
    UserId,
    Date,
    ShiftStart,
    ShiftEnd,
    BreakStart,
    BreakEnd,
    WorkLocationId,
    ScheduleType,
    CreatedAt,
    UpdatedAt,
}
