//! Monitoring domain models: stored reports, summaries and analytics.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    model::{
        attendance::AttendanceStatus,
        monitoring::{
            AttendanceReportDto, DashboardAnalyticsDto, MonitoringReportDto,
            MonitoringSummaryDto,
        },
    },
    server::error::internal::InternalError,
};

/// Report type written by the scheduled daily job.
pub const DAILY_REPORT_TYPE: &str = "daily";

/// A persisted report row whose `data` holds a JSON-encoded [`MonitoringSummary`].
#[derive(Debug, Clone, PartialEq)]
pub struct MonitoringReport {
    pub id: String,
    pub report_type: String,
    pub data: String,
    pub generated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl MonitoringReport {
    pub fn from_entity(entity: entity::monitoring_report::Model) -> Self {
        Self {
            id: entity.id,
            report_type: entity.report_type,
            data: entity.data,
            generated_at: entity.generated_at,
            created_at: entity.created_at,
        }
    }

    /// Decodes the stored summary.
    ///
    /// # Returns
    /// - `Ok(MonitoringSummary)` - Decoded payload
    /// - `Err(InternalError::MalformedReport)` - `data` is not a valid summary
    pub fn summary(&self) -> Result<MonitoringSummary, InternalError> {
        serde_json::from_str(&self.data).map_err(|source| InternalError::MalformedReport {
            id: self.id.clone(),
            source,
        })
    }

    /// Converts the report to a DTO with `data` decoded as arbitrary JSON.
    ///
    /// # Returns
    /// - `Ok(MonitoringReportDto)` - Converted report
    /// - `Err(InternalError::MalformedReport)` - `data` is not valid JSON
    pub fn into_dto(self) -> Result<MonitoringReportDto, InternalError> {
        let data = serde_json::from_str(&self.data).map_err(|source| {
            InternalError::MalformedReport {
                id: self.id.clone(),
                source,
            }
        })?;

        Ok(MonitoringReportDto {
            id: self.id,
            report_type: self.report_type,
            data,
            generated_at: self.generated_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateReportParams {
    pub report_type: String,
    pub data: String,
    pub generated_at: DateTime<Utc>,
}

/// Aggregate counts for one day.
///
/// Leave counts cover every request regardless of date; attendance counts cover only
/// the summary's date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringSummary {
    pub date: NaiveDate,
    pub total_users: u64,
    pub active_users: u64,
    pub total_check_in: u64,
    pub total_check_out: u64,
    pub pending_leaves: u64,
    pub approved_leaves: u64,
    pub rejected_leaves: u64,
    pub generated_at: DateTime<Utc>,
}

impl MonitoringSummary {
    pub fn into_dto(self) -> MonitoringSummaryDto {
        MonitoringSummaryDto {
            date: self.date,
            total_users: self.total_users,
            active_users: self.active_users,
            total_check_in: self.total_check_in,
            total_check_out: self.total_check_out,
            pending_leaves: self.pending_leaves,
            approved_leaves: self.approved_leaves,
            rejected_leaves: self.rejected_leaves,
            generated_at: self.generated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardAnalytics {
    pub week_start: NaiveDate,
    /// Attendance events per day, Monday first.
    pub weekly_attendance: Vec<u64>,
    /// Leave request counts keyed by status.
    pub leave_distribution: BTreeMap<String, u64>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardAnalytics {
    pub fn into_dto(self) -> DashboardAnalyticsDto {
        DashboardAnalyticsDto {
            week_start: self.week_start,
            weekly_attendance: self.weekly_attendance,
            leave_distribution: self.leave_distribution,
            generated_at: self.generated_at,
        }
    }
}

/// One user's attendance over a reporting period.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceReport {
    pub user_id: String,
    pub name: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub late_count: u32,
    pub absent_count: u32,
    pub daily_status: BTreeMap<NaiveDate, AttendanceStatus>,
}

impl AttendanceReport {
    pub fn into_dto(self) -> AttendanceReportDto {
        AttendanceReportDto {
            user_id: self.user_id,
            name: self.name,
            period_start: self.period_start,
            period_end: self.period_end,
            late_count: self.late_count,
            absent_count: self.absent_count,
            daily_status: self.daily_status,
        }
    }
}
