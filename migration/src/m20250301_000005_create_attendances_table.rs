use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendances::Table)
                    .if_not_exists()
                    .col(string(Attendances::Id).primary_key())
                    .col(string(Attendances::UserId))
                    .col(timestamp_with_time_zone(Attendances::Time))
                    .col(double(Attendances::Latitude))
                    .col(double(Attendances::Longitude))
                    .col(string(Attendances::SelfieUrl))
                    .col(string(Attendances::Type))
                    .col(text_null(Attendances::Notes))
                    .col(string(Attendances::Status))
                    .col(
                        timestamp_with_time_zone(Attendances::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Attendances::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendances_user_id")
                            .from(Attendances::Table, Attendances::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attendances_user_id_time")
                    .table(Attendances::Table)
                    .col(Attendances::UserId)
                    .col(Attendances::Time)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendances::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendances {
    Table,
    Id,
    UserId,
    Time,
    Latitude,
    Longitude,
    SelfieUrl,
    Type,
    Notes,
    Status,
    CreatedAt,
    UpdatedAt,
}
