use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        monitoring::{
            AttendanceReportDto, DashboardAnalyticsDto, MonitoringReportDto, MonitoringSummaryDto,
        },
    },
    server::{
        controller::param::{DateParams, DateRangeParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::monitoring::{AttendanceReport, MonitoringReport},
        service::monitoring::{export_file_name, MonitoringService, XLSX_CONTENT_TYPE},
        state::AppState,
    },
};

/// Tag for grouping monitoring endpoints in OpenAPI documentation
pub static MONITORING_TAG: &str = "monitoring";

/// Get every stored monitoring report, newest first.
///
/// # Access Control
/// - `Manager` - Admin, HR and managers
///
/// # Returns
/// - `200 OK` - Stored reports with their decoded data
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not a manager
/// - `500 Internal Server Error` - Database error or undecodable report data
#[utoipa::path(
    get,
    path = "/api/v1/monitoring/reports",
    tag = MONITORING_TAG,
    responses(
        (status = 200, description = "Successfully retrieved reports", body = Vec<MonitoringReportDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_reports(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Manager])?;

    let reports = MonitoringService::new(&state.db).reports().await?;

    let dtos = reports
        .into_iter()
        .map(MonitoringReport::into_dto)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the monitoring summary for a day.
///
/// # Access Control
/// - `Manager` - Admin, HR and managers
///
/// # Returns
/// - `200 OK` - User, attendance and leave counts
/// - `400 Bad Request` - Malformed date
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not a manager
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/monitoring/summary",
    tag = MONITORING_TAG,
    params(
        ("date" = Option<String>, Query, description = "Day to summarize (YYYY-MM-DD, default: today)")
    ),
    responses(
        (status = 200, description = "Successfully computed summary", body = MonitoringSummaryDto),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DateParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Manager])?;

    let summary = MonitoringService::new(&state.db)
        .summary(params.date_or_today()?)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Get dashboard analytics for the week containing a day.
///
/// # Access Control
/// - `Manager` - Admin, HR and managers
///
/// # Returns
/// - `200 OK` - Daily attendance counts Monday through Sunday and the leave distribution
/// - `400 Bad Request` - Malformed date
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not a manager
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/monitoring/dashboard",
    tag = MONITORING_TAG,
    params(
        ("date" = Option<String>, Query, description = "Any day of the week to show (YYYY-MM-DD, default: today)")
    ),
    responses(
        (status = 200, description = "Successfully computed dashboard", body = DashboardAnalyticsDto),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DateParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Manager])?;

    let dashboard = MonitoringService::new(&state.db)
        .dashboard(params.date_or_today()?)
        .await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

/// Get every user's attendance report for the current month.
///
/// Reports are computed concurrently; any failure fails the whole request.
///
/// # Access Control
/// - `Manager` - Admin, HR and managers
///
/// # Returns
/// - `200 OK` - One report per live user, ordered by name
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not a manager
/// - `500 Internal Server Error` - Database error or failed report task
#[utoipa::path(
    get,
    path = "/api/v1/monitoring/attendance-report",
    tag = MONITORING_TAG,
    responses(
        (status = 200, description = "Successfully computed attendance reports", body = Vec<AttendanceReportDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_attendance_report(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Manager])?;

    let reports = MonitoringService::new(&state.db).attendance_report().await?;

    let dtos: Vec<AttendanceReportDto> =
        reports.into_iter().map(AttendanceReport::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Export stored daily reports as a spreadsheet.
///
/// # Access Control
/// - `Manager` - Admin, HR and managers
///
/// # Returns
/// - `200 OK` - An xlsx attachment named `report_YYYYMMDD_HHMMSS.xlsx`
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not a manager
/// - `422 Unprocessable Entity` - Missing or invalid dates, or start after end
/// - `500 Internal Server Error` - Database, spreadsheet or report decoding error
#[utoipa::path(
    get,
    path = "/api/v1/monitoring/export",
    tag = MONITORING_TAG,
    params(
        ("start_date" = String, Query, description = "First day, inclusive (YYYY-MM-DD)"),
        ("end_date" = String, Query, description = "Last day, inclusive (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Spreadsheet of daily reports", body = Vec<u8>,
            content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 422, description = "Please input correct date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn export_reports(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DateRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Manager])?;

    let bytes = MonitoringService::new(&state.db)
        .export(params.start_date.as_deref(), params.end_date.as_deref())
        .await?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(Utc::now())
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}
