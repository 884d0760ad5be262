use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000010_create_devices_table::Devices;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeviceLogs::Table)
                    .if_not_exists()
                    .col(string(DeviceLogs::Id).primary_key())
                    .col(string(DeviceLogs::DeviceId))
                    .col(string_null(DeviceLogs::EmployeeId))
                    .col(string(DeviceLogs::Action))
                    .col(text(DeviceLogs::Description))
                    .col(
                        timestamp_with_time_zone(DeviceLogs::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_device_logs_device_id")
                            .from(DeviceLogs::Table, DeviceLogs::DeviceId)
                            .to(Devices::Table, Devices::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeviceLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeviceLogs {
    Table,
    Id,
    DeviceId,
    EmployeeId,
    Action,
    Description,
    CreatedAt,
}
