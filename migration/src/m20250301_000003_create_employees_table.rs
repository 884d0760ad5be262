use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_users_table::Users,
    m20250301_000002_create_departments_table::Departments,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(string(Employees::Id).primary_key())
                    .col(string_uniq(Employees::UserId))
                    .col(string_null(Employees::DepartmentId))
                    .col(string(Employees::Name))
                    .col(string_null(Employees::Location))
                    .col(string(Employees::Timezone))
                    .col(string_null(Employees::PhotoUrl))
                    .col(string(Employees::Status))
                    .col(date(Employees::JoinDate))
                    .col(string_null(Employees::ReportingTo))
                    .col(
                        timestamp_with_time_zone(Employees::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Employees::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_user_id")
                            .from(Employees::Table, Employees::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_department_id")
                            .from(Employees::Table, Employees::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Id,
    UserId,
    DepartmentId,
    Name,
    Location,
    Timezone,
    PhotoUrl,
    Status,
    JoinDate,
    ReportingTo,
    CreatedAt,
    UpdatedAt,
}
