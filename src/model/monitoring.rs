use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::model::attendance::AttendanceStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonitoringReportDto {
    pub id: String,
    pub report_type: String,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonitoringSummaryDto {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardAnalyticsDto {
    pub week_start: NaiveDate,
    pub weekly_attendance: Vec<u64>,
    pub leave_distribution: BTreeMap<String, u64>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceReportDto {
    pub user_id: String,
    pub name: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub late_count: u32,
    pub absent_count: u32,
    pub daily_status: BTreeMap<NaiveDate, AttendanceStatus>,
}
