pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_departments_table;
mod m20250301_000003_create_employees_table;
mod m20250301_000004_create_work_locations_table;
mod m20250301_000005_create_attendances_table;
mod m20250301_000006_create_leave_requests_table;
mod m20250301_000007_create_schedules_table;
mod m20250301_000008_create_schedule_swap_requests_table;
mod m20250301_000009_create_notifications_table;
mod m20250301_000010_create_devices_table;
mod m20250301_000011_create_device_logs_table;
mod m20250301_000012_create_monitoring_reports_table;
mod m20250302_000013_seed_departments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_departments_table::Migration),
            Box::new(m20250301_000003_create_employees_table::Migration),
            Box::new(m20250301_000004_create_work_locations_table::Migration),
            Box::new(m20250301_000005_create_attendances_table::Migration),
            Box::new(m20250301_000006_create_leave_requests_table::Migration),
            Box::new(m20250301_000007_create_schedules_table::Migration),
            Box::new(m20250301_000008_create_schedule_swap_requests_table::Migration),
            Box::new(m20250301_000009_create_notifications_table::Migration),
            Box::new(m20250301_000010_create_devices_table::Migration),
            Box::new(m20250301_000011_create_device_logs_table::Migration),
            Box::new(m20250301_000012_create_monitoring_reports_table::Migration),
            Box::new(m20250302_000013_seed_departments::Migration),
        ]
    }
}
