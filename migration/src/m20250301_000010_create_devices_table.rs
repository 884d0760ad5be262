use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Devices::Table)
                    .if_not_exists()
                    .col(string(Devices::Id).primary_key())
                    .col(string(Devices::Name))
                    .col(string(Devices::Type))
                    .col(string(Devices::Location))
                    .col(string(Devices::Status))
                    .col(timestamp_with_time_zone_null(Devices::LastCheck))
                    .col(
                        timestamp_with_time_zone(Devices::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Devices::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Devices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Devices {
    Table,
    Id,
    Name,
    Type,
    Location,
    Status,
    LastCheck,
    CreatedAt,
    UpdatedAt,
}
