use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkLocations::Table)
                    .if_not_exists()
                    .col(string(WorkLocations::Id).primary_key())
                    .col(string(WorkLocations::Name))
                    .col(string(WorkLocations::Address))
                    .col(string(WorkLocations::City))
                    .col(string(WorkLocations::State))
                    .col(string(WorkLocations::Country))
                    .col(string(WorkLocations::PostalCode))
                    .col(string(WorkLocations::Timezone))
                    .col(
                        timestamp_with_time_zone(WorkLocations::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(WorkLocations::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkLocations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkLocations {
    Table,
    Id,
    Name,
    Address,
    City,
    State,
    Country,
    PostalCode,
    Timezone,
    CreatedAt,
    UpdatedAt,
}
