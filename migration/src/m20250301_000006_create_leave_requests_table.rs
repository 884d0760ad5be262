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
                    .table(LeaveRequests::Table)
                    .if_not_exists()
                    .col(string(LeaveRequests::Id).primary_key())
                    .col(string(LeaveRequests::UserId))
                    .col(string(LeaveRequests::Type))
                    .col(date(LeaveRequests::StartDate))
                    .col(date(LeaveRequests::EndDate))
                    .col(text(LeaveRequests::Reason))
                    .col(string(LeaveRequests::Status))
                    .col(string_null(LeaveRequests::ReviewedBy))
                    .col(timestamp_with_time_zone_null(LeaveRequests::ReviewedAt))
                    .col(text_null(LeaveRequests::Note))
                    .col(
                        timestamp_with_time_zone(LeaveRequests::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(LeaveRequests::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_requests_user_id")
                            .from(LeaveRequests::Table, LeaveRequests::UserId)
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
                    .name("idx_leave_requests_user_id_status")
                    .table(LeaveRequests::Table)
                    .col(LeaveRequests::UserId)
                    .col(LeaveRequests::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeaveRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeaveRequests {
    Table,
    Id,
    UserId,
    Type,
    StartDate,
    EndDate,
    Reason,
    Status,
    ReviewedBy,
    ReviewedAt,
    Note,
    CreatedAt,
    UpdatedAt,
}
