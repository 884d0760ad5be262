use chrono::Utc;
use sea_orm_migration::prelude::*;

use super::m20250301_000002_create_departments_table::Departments;

/// Departments every fresh installation starts with. Registration assigns new
/// employees to the first entry when no department is requested.
const DEFAULT_DEPARTMENTS: [&str; 4] = [
    "Information Technology",
    "Human Resources",
    "Finance",
    "Operations",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let now = Utc::now();

        let mut insert = Query::insert();
        insert.into_table(Departments::Table).columns([
            Departments::Id,
            Departments::Name,
            Departments::Location,
            Departments::Timezone,
            Departments::CreatedAt,
            Departments::UpdatedAt,
        ]);

        for name in DEFAULT_DEPARTMENTS {
            insert.values_panic([
                uuid::Uuid::new_v4().to_string().into(),
                name.into(),
                "Head Office".into(),
                "UTC".into(),
                now.into(),
                now.into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Departments::Table)
            .and_where(Expr::col(Departments::Name).is_in(DEFAULT_DEPARTMENTS))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
