//! Monitoring service.
//!
//! Aggregate views for managers: the daily summary, the weekly dashboard, per-user
//! monthly attendance reports and the spreadsheet export of stored daily reports.
//! The scheduled worker persists one summary per day through
//! [`MonitoringService::generate_daily_report`].

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};
use rust_xlsxwriter::Workbook;
use sea_orm::{DatabaseConnection, DbErr};
use std::collections::{BTreeMap, HashMap};
use tokio::task::JoinSet;

use crate::{
    model::{
        attendance::{AttendanceStatus, AttendanceType},
        leave::LeaveStatus,
    },
    server::{
        data::{
            attendance::AttendanceRepository, employee::EmployeeRepository,
            leave_request::LeaveRequestRepository, monitoring::MonitoringRepository,
            user::UserRepository,
        },
        error::{internal::InternalError, AppError},
        model::{
            attendance::Attendance,
            monitoring::{
                AttendanceReport, CreateReportParams, DashboardAnalytics, MonitoringReport,
                MonitoringSummary, DAILY_REPORT_TYPE,
            },
            user::User,
        },
        util::date::{day_range, inclusive_range, month_bounds, parse_date, week_start},
    },
};

/// MIME type of the exported spreadsheet.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const EXPORT_SHEET: &str = "Report";

const EXPORT_HEADERS: [&str; 9] = [
    "Date",
    "Report Type",
    "Total Users",
    "Active Users",
    "Total Check_In",
    "Total Check_Out",
    "Pending Leaves",
    "Approved Leaves",
    "Rejected Leaves",
];

pub struct MonitoringService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonitoringService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored report, newest first.
    pub async fn reports(&self) -> Result<Vec<MonitoringReport>, AppError> {
        Ok(MonitoringRepository::new(self.db).get_all().await?)
    }

    /// Computes the monitoring summary for a day.
    ///
    /// User counts are current, attendance counts cover the given UTC day and leave
    /// counts cover all time.
    ///
    /// # Arguments
    /// - `date` - UTC day for the attendance counts
    ///
    /// # Returns
    /// - `Ok(MonitoringSummary)` - Counts stamped with the generation time
    pub async fn summary(&self, date: NaiveDate) -> Result<MonitoringSummary, AppError> {
        let (start, end) = day_range(date);
        let attendance_repo = AttendanceRepository::new(self.db);
        let leave_repo = LeaveRequestRepository::new(self.db);

        Ok(MonitoringSummary {
            date,
            total_users: UserRepository::new(self.db).count().await?,
            active_users: EmployeeRepository::new(self.db).count_active().await?,
            total_check_in: attendance_repo
                .count_by_type_between(AttendanceType::CheckIn, start, end)
                .await?,
            total_check_out: attendance_repo
                .count_by_type_between(AttendanceType::CheckOut, start, end)
                .await?,
            pending_leaves: leave_repo.count_by_status(LeaveStatus::Pending).await?,
            approved_leaves: leave_repo.count_by_status(LeaveStatus::Approved).await?,
            rejected_leaves: leave_repo.count_by_status(LeaveStatus::Rejected).await?,
            generated_at: Utc::now(),
        })
    }

    /// Computes the dashboard for the week containing `date`.
    ///
    /// # Returns
    /// - `Ok(DashboardAnalytics)` - Events per day Monday through Sunday and leave counts by status
    pub async fn dashboard(&self, date: NaiveDate) -> Result<DashboardAnalytics, AppError> {
        let monday = week_start(date);
        let sunday = monday + TimeDelta::days(6);
        let (start, end) = inclusive_range(monday, sunday);

        let mut weekly_attendance = vec![0u64; 7];
        for attendance in AttendanceRepository::new(self.db)
            .get_between(start, end)
            .await?
        {
            let offset = (attendance.time.date_naive() - monday).num_days();
            if let Some(count) = usize::try_from(offset)
                .ok()
                .and_then(|offset| weekly_attendance.get_mut(offset))
            {
                *count += 1;
            }
        }

        let leave_repo = LeaveRequestRepository::new(self.db);
        let mut leave_distribution = BTreeMap::new();
        for status in [
            LeaveStatus::Pending,
            LeaveStatus::Approved,
            LeaveStatus::Rejected,
        ] {
            let count = leave_repo.count_by_status(status).await?;
            leave_distribution.insert(status.as_str().to_string(), count);
        }

        Ok(DashboardAnalytics {
            week_start: monday,
            weekly_attendance,
            leave_distribution,
            generated_at: Utc::now(),
        })
    }

    /// Builds the attendance report for every live user over the current UTC month.
    pub async fn attendance_report(&self) -> Result<Vec<AttendanceReport>, AppError> {
        let today = Utc::now().date_naive();
        let (first, last) = month_bounds(today.year(), today.month()).ok_or_else(|| {
            AppError::InternalError(format!("no month bounds for {}", today))
        })?;

        self.attendance_report_between(first, last).await
    }

    /// Builds per-user attendance reports for `[first, last]`, one task per user.
    ///
    /// Any failing user task fails the whole report; the remaining tasks are aborted
    /// when the set is dropped.
    ///
    /// # Arguments
    /// - `first` - First day of the period
    /// - `last` - Last day of the period, inclusive
    ///
    /// # Returns
    /// - `Ok(Vec<AttendanceReport>)` - One report per user, ordered by name
    /// - `Err(AppError::DbErr)` - A user's attendance could not be loaded
    /// - `Err(InternalError::TaskJoin)` - A report task panicked
    pub async fn attendance_report_between(
        &self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<AttendanceReport>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        let user_ids: Vec<String> = users.iter().map(|user| user.id.clone()).collect();
        let mut employee_names: HashMap<String, String> = EmployeeRepository::new(self.db)
            .get_by_user_ids(&user_ids)
            .await?
            .into_iter()
            .map(|employee| (employee.user_id, employee.name))
            .collect();

        let mut tasks = JoinSet::new();
        for user in users {
            let db = self.db.clone();
            let name = employee_names
                .remove(&user.id)
                .unwrap_or_else(|| user.full_name.clone());
            tasks.spawn(async move { build_user_report(&db, user, name, first, last).await });
        }

        let mut reports = collect_reports(tasks).await?;
        reports.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.user_id.cmp(&b.user_id)));

        Ok(reports)
    }

    /// Exports stored reports generated between two dates into an xlsx workbook.
    ///
    /// # Arguments
    /// - `start_date` - First day, `YYYY-MM-DD`
    /// - `end_date` - Last day, `YYYY-MM-DD`, inclusive
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - The workbook bytes with a single "Report" sheet
    /// - `Err(AppError::Unprocessable)` - A date is missing, malformed, or start is after end
    /// - `Err(InternalError::MalformedReport)` - A stored report's data is not a summary
    pub async fn export(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<u8>, AppError> {
        let invalid = || AppError::Unprocessable("please input correct date".to_string());

        let start = start_date
            .and_then(|value| parse_date(value).ok())
            .ok_or_else(invalid)?;
        let end = end_date
            .and_then(|value| parse_date(value).ok())
            .ok_or_else(invalid)?;
        if start > end {
            return Err(invalid());
        }

        let (from, to) = inclusive_range(start, end);
        let reports = MonitoringRepository::new(self.db)
            .get_generated_between(from, to)
            .await?;

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(EXPORT_SHEET)?;

        for (col, header) in EXPORT_HEADERS.iter().enumerate() {
            sheet.write_string(0, col as u16, *header)?;
        }

        for (index, report) in reports.iter().enumerate() {
            let summary = report.summary()?;
            let row = index as u32 + 1;

            sheet.write_string(row, 0, summary.date.to_string())?;
            sheet.write_string(row, 1, report.report_type.as_str())?;

            let counts = [
                summary.total_users,
                summary.active_users,
                summary.total_check_in,
                summary.total_check_out,
                summary.pending_leaves,
                summary.approved_leaves,
                summary.rejected_leaves,
            ];
            for (offset, count) in counts.into_iter().enumerate() {
                sheet.write_number(row, offset as u16 + 2, count as f64)?;
            }
        }

        tracing::debug!(
            "Exported {} monitoring reports from {} to {}",
            reports.len(),
            start,
            end
        );

        Ok(workbook.save_to_buffer()?)
    }

    /// Computes today's summary and stores it as a daily report.
    ///
    /// # Returns
    /// - `Ok(MonitoringReport)` - The stored report
    /// - `Err(InternalError::ReportEncoding)` - Summary could not be serialized
    pub async fn generate_daily_report(&self) -> Result<MonitoringReport, AppError> {
        let summary = self.summary(Utc::now().date_naive()).await?;
        let data = serde_json::to_string(&summary).map_err(InternalError::ReportEncoding)?;

        let report = MonitoringRepository::new(self.db)
            .create(CreateReportParams {
                report_type: DAILY_REPORT_TYPE.to_string(),
                data,
                generated_at: summary.generated_at,
            })
            .await?;

        tracing::info!("Generated daily monitoring report {}", report.id);

        Ok(report)
    }
}

/// File name for an export generated at `now`.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("report_{}.xlsx", now.format("%Y%m%d_%H%M%S"))
}

/// Waits for every per-user report task.
///
/// Returns on the first failure; dropping the set aborts the tasks still running.
async fn collect_reports(
    mut tasks: JoinSet<Result<AttendanceReport, DbErr>>,
) -> Result<Vec<AttendanceReport>, AppError> {
    let mut reports = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let report = joined.map_err(InternalError::from)??;
        reports.push(report);
    }

    Ok(reports)
}

/// Builds one user's report; `name` is the employee name, or the account name when
/// the user has no employee record.
async fn build_user_report(
    db: &DatabaseConnection,
    user: User,
    name: String,
    first: NaiveDate,
    last: NaiveDate,
) -> Result<AttendanceReport, DbErr> {
    let (from, to) = inclusive_range(first, last);
    let attendances = AttendanceRepository::new(db)
        .get_by_user_between(&user.id, from, to)
        .await?;

    let daily_status = daily_status(&attendances, first, last);
    let late_count = daily_status
        .values()
        .filter(|status| **status == AttendanceStatus::Late)
        .count() as u32;
    let absent_count = daily_status
        .values()
        .filter(|status| **status == AttendanceStatus::Absent)
        .count() as u32;

    Ok(AttendanceReport {
        user_id: user.id,
        name,
        period_start: first,
        period_end: last,
        late_count,
        absent_count,
        daily_status,
    })
}

/// Classifies every day in `[first, last]`.
///
/// A day is late when any check-in that day was late, present when it has any event,
/// and absent otherwise.
fn daily_status(
    attendances: &[Attendance],
    first: NaiveDate,
    last: NaiveDate,
) -> BTreeMap<NaiveDate, AttendanceStatus> {
    let mut days: BTreeMap<NaiveDate, AttendanceStatus> = first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| (day, AttendanceStatus::Absent))
        .collect();

    for attendance in attendances {
        let Some(status) = days.get_mut(&attendance.time.date_naive()) else {
            continue;
        };

        let late = attendance.attendance_type == AttendanceType::CheckIn
            && attendance.status == AttendanceStatus::Late;
        if late {
            *status = AttendanceStatus::Late;
        } else if *status == AttendanceStatus::Absent {
            *status = AttendanceStatus::Present;
        }
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_utils::{builder::TestBuilder, factory};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(day: NaiveDate, hour: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(&day.and_hms_opt(hour, 0, 0).unwrap())
    }

    /// Tests summary counts across users, attendance and leave.
    ///
    /// Expected: deleted users excluded, only the day's events counted
    #[tokio::test]
    async fn computes_summary() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let day = date(2025, 3, 10);
        let (user, _, _) = factory::helpers::create_user_with_employee(db).await?;
        factory::user::UserFactory::new(db)
            .deleted_at(Some(Utc::now()))
            .build()
            .await?;
        factory::attendance::AttendanceFactory::new(db, &user.id)
            .time(at(day, 8))
            .build()
            .await?;
        factory::attendance::AttendanceFactory::new(db, &user.id)
            .attendance_type("check_out")
            .time(at(day, 17))
            .build()
            .await?;
        factory::attendance::AttendanceFactory::new(db, &user.id)
            .time(at(day.succ_opt().unwrap(), 8))
            .build()
            .await?;
        factory::create_leave_request(db, &user.id).await?;
        factory::leave_request::LeaveRequestFactory::new(db, &user.id)
            .status("approved")
            .build()
            .await?;

        let summary = MonitoringService::new(db).summary(day).await?;

        assert_eq!(summary.date, day);
        assert_eq!(summary.total_users, 1);
        assert_eq!(summary.active_users, 1);
        assert_eq!(summary.total_check_in, 1);
        assert_eq!(summary.total_check_out, 1);
        assert_eq!(summary.pending_leaves, 1);
        assert_eq!(summary.approved_leaves, 1);
        assert_eq!(summary.rejected_leaves, 0);

        Ok(())
    }

    /// Tests weekly bucketing from Monday through Sunday.
    ///
    /// Expected: events counted on their weekday, events outside the week ignored
    #[tokio::test]
    async fn buckets_dashboard_by_weekday() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        // 2025-03-10 is a Monday.
        for time in [
            at(date(2025, 3, 10), 8),
            at(date(2025, 3, 10), 17),
            at(date(2025, 3, 16), 9),
            at(date(2025, 3, 17), 9),
        ] {
            factory::attendance::AttendanceFactory::new(db, &user.id)
                .time(time)
                .build()
                .await?;
        }

        let dashboard = MonitoringService::new(db)
            .dashboard(date(2025, 3, 13))
            .await?;

        assert_eq!(dashboard.week_start, date(2025, 3, 10));
        assert_eq!(dashboard.weekly_attendance, vec![2, 0, 0, 0, 0, 0, 1]);
        assert_eq!(dashboard.leave_distribution.len(), 3);
        assert_eq!(dashboard.leave_distribution.get("pending"), Some(&0));

        Ok(())
    }

    /// Tests day classification.
    ///
    /// Expected: late beats present, days without events are absent
    #[test]
    fn classifies_days() {
        let first = date(2025, 3, 1);
        let last = date(2025, 3, 3);
        let attendance = |day: NaiveDate, attendance_type, status| Attendance {
            id: "a".to_string(),
            user_id: "u".to_string(),
            time: at(day, 9),
            latitude: 0.0,
            longitude: 0.0,
            selfie_url: String::new(),
            attendance_type,
            notes: None,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let statuses = daily_status(
            &[
                attendance(first, AttendanceType::CheckIn, AttendanceStatus::Present),
                attendance(first, AttendanceType::CheckOut, AttendanceStatus::Present),
                attendance(date(2025, 3, 2), AttendanceType::CheckIn, AttendanceStatus::Late),
                attendance(date(2025, 3, 2), AttendanceType::CheckOut, AttendanceStatus::Present),
            ],
            first,
            last,
        );

        assert_eq!(statuses.len(), 3);
        assert_eq!(statuses[&first], AttendanceStatus::Present);
        assert_eq!(statuses[&date(2025, 3, 2)], AttendanceStatus::Late);
        assert_eq!(statuses[&last], AttendanceStatus::Absent);
    }

    /// Tests the per-user monthly report.
    ///
    /// Expected: one report per live user ordered by name with late and absent counts
    #[tokio::test]
    async fn builds_attendance_report() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let zoe = factory::user::UserFactory::new(db)
            .full_name("Zoe")
            .build()
            .await?;
        let adam = factory::user::UserFactory::new(db)
            .full_name("Adam")
            .build()
            .await?;
        let first = date(2025, 2, 1);
        let last = date(2025, 2, 28);
        factory::attendance::AttendanceFactory::new(db, &zoe.id)
            .time(at(date(2025, 2, 3), 9))
            .status("late")
            .build()
            .await?;
        factory::attendance::AttendanceFactory::new(db, &zoe.id)
            .time(at(date(2025, 2, 4), 8))
            .build()
            .await?;

        let reports = MonitoringService::new(db)
            .attendance_report_between(first, last)
            .await?;

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].user_id, adam.id);
        assert_eq!(reports[0].absent_count, 28);
        assert_eq!(reports[1].name, "Zoe");
        assert_eq!(reports[1].late_count, 1);
        assert_eq!(reports[1].absent_count, 26);
        assert_eq!(reports[1].daily_status.len(), 28);

        Ok(())
    }

    /// Tests that the report names users after their employee record.
    ///
    /// Expected: employee name used over the account name
    #[tokio::test]
    async fn report_prefers_employee_name() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::UserFactory::new(db)
            .full_name("Account Name")
            .build()
            .await?;
        factory::employee::EmployeeFactory::new(db, &user.id)
            .name("Employee Name")
            .build()
            .await?;

        let reports = MonitoringService::new(db)
            .attendance_report_between(date(2025, 2, 1), date(2025, 2, 7))
            .await?;

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].user_id, user.id);
        assert_eq!(reports[0].name, "Employee Name");

        Ok(())
    }

    /// Tests that a panicking per-user task fails the whole report.
    ///
    /// Expected: Err(InternalErr(TaskJoin)) even though another task succeeded
    #[tokio::test]
    async fn panicking_task_fails_report() {
        let mut tasks: JoinSet<Result<AttendanceReport, DbErr>> = JoinSet::new();
        tasks.spawn(async {
            Ok(AttendanceReport {
                user_id: "ok".to_string(),
                name: "Ok".to_string(),
                period_start: date(2025, 2, 1),
                period_end: date(2025, 2, 1),
                late_count: 0,
                absent_count: 1,
                daily_status: BTreeMap::new(),
            })
        });
        tasks.spawn(async { panic!("report task failed") });

        let result = collect_reports(tasks).await;

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::TaskJoin(_)))
        ));
    }

    /// Tests that a database failure in one task fails the whole report.
    ///
    /// Expected: Err(DbErr)
    #[tokio::test]
    async fn failing_task_fails_report() {
        let mut tasks: JoinSet<Result<AttendanceReport, DbErr>> = JoinSet::new();
        tasks.spawn(async { Err(DbErr::Custom("attendance unavailable".to_string())) });

        let result = collect_reports(tasks).await;

        assert!(matches!(result, Err(AppError::DbErr(_))));
    }

    /// Tests date validation on export.
    ///
    /// Expected: Err(Unprocessable) for missing, malformed and reversed dates
    #[tokio::test]
    async fn export_rejects_bad_dates() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = MonitoringService::new(db);

        for (start, end) in [
            (None, Some("2025-03-01")),
            (Some("2025-3-x"), Some("2025-03-01")),
            (Some("2025-03-05"), Some("2025-03-01")),
        ] {
            let result = service.export(start, end).await;
            assert!(matches!(
                result,
                Err(AppError::Unprocessable(msg)) if msg == "please input correct date"
            ));
        }

        Ok(())
    }

    /// Tests exporting stored reports.
    ///
    /// Expected: a zip-based xlsx payload
    #[tokio::test]
    async fn exports_reports_to_xlsx() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::monitoring_report::MonitoringReportFactory::new(db)
            .generated_at(at(date(2025, 3, 10), 8))
            .build()
            .await?;

        let bytes = MonitoringService::new(db)
            .export(Some("2025-03-10"), Some("2025-03-10"))
            .await?;

        assert!(bytes.starts_with(b"PK"));

        Ok(())
    }

    /// Tests that a stored report with unreadable data fails the export.
    ///
    /// Expected: Err(InternalError::MalformedReport)
    #[tokio::test]
    async fn export_fails_on_malformed_report() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::monitoring_report::MonitoringReportFactory::new(db)
            .data("{\"not\":\"a summary\"}")
            .generated_at(at(date(2025, 3, 10), 8))
            .build()
            .await?;

        let result = MonitoringService::new(db)
            .export(Some("2025-03-01"), Some("2025-03-31"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::MalformedReport { .. }))
        ));

        Ok(())
    }

    /// Tests storing the daily report.
    ///
    /// Expected: daily report whose data decodes back to a summary
    #[tokio::test]
    async fn generates_daily_report() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_user(db).await?;

        let service = MonitoringService::new(db);
        let report = service.generate_daily_report().await?;
        let summary = report.summary()?;

        assert_eq!(report.report_type, DAILY_REPORT_TYPE);
        assert_eq!(summary.total_users, 1);
        assert_eq!(service.reports().await?.len(), 1);

        Ok(())
    }

    #[test]
    fn names_export_file() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 8, 5, 9).unwrap();

        assert_eq!(export_file_name(now), "report_20250310_080509.xlsx");
    }
}
