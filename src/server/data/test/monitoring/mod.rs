use crate::server::{
    data::monitoring::MonitoringRepository,
    model::monitoring::{CreateReportParams, DAILY_REPORT_TYPE},
};
use chrono::{Duration, TimeZone, Utc};
use entity::prelude::MonitoringReport;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_generated_between;
