use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        attendance::{
            AttendanceDto, AttendanceListItemDto, AttendanceType, CreateAttendanceDto,
            UpdateAttendanceDto,
        },
    },
    server::{
        controller::param::{parse_optional_date, DateParams, DateRangeParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            actor::Actor,
            attendance::{Attendance, AttendanceListItem},
            page::PageParams,
        },
        service::{attendance::AttendanceService, parse_enum},
        state::AppState,
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

#[derive(Deserialize)]
pub struct AttendanceListParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub attendance_type: Option<String>,
}

/// Record a check-in or check-out.
///
/// A check-in after the start of the caller's scheduled shift that day is marked late.
///
/// # Access Control
/// - Authenticated - The event is recorded for the caller
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Event type, optional time, coordinates, selfie URL and notes
///
/// # Returns
/// - `201 Created` - The stored event
/// - `400 Bad Request` - Unknown type, missing selfie or coordinates out of range
/// - `401 Unauthorized` - Missing or invalid access token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/attendance",
    tag = ATTENDANCE_TAG,
    request_body = CreateAttendanceDto,
    responses(
        (status = 201, description = "Successfully recorded attendance", body = AttendanceDto),
        (status = 400, description = "Invalid attendance data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let attendance = AttendanceService::new(&state.db)
        .create(&token.user_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(attendance.into_dto())))
}

/// Get a paginated list of attendance events, newest first.
///
/// Staff see every user's events; everyone else only sees their own.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - One page of events with user name, email and department
/// - `400 Bad Request` - Malformed date or unknown type filter
/// - `401 Unauthorized` - Missing or invalid access token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/attendance",
    tag = ATTENDANCE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("date" = Option<String>, Query, description = "Only events on this UTC day (YYYY-MM-DD)"),
        ("type" = Option<String>, Query, description = "Only events of this type (check_in or check_out)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attendance", body = PageDto<AttendanceListItemDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_attendances(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AttendanceListParams>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let actor = Actor::from(&token);

    let date = parse_optional_date(params.date.as_deref(), "date")?;
    let attendance_type = params
        .attendance_type
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(parse_enum::<AttendanceType>)
        .transpose()?;

    let page = AttendanceService::new(&state.db)
        .list(
            &actor,
            date,
            attendance_type,
            PageParams::new(params.page, params.limit),
        )
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(AttendanceListItem::into_dto))))
}

/// Get who has checked in on a day.
///
/// Maps each active employee's name to whether they recorded any attendance on the date.
///
/// # Access Control
/// - `Manager` - Admin, HR and managers
///
/// # Returns
/// - `200 OK` - Employee name to attendance flag
/// - `400 Bad Request` - Malformed date
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not a manager
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/attendance/status",
    tag = ATTENDANCE_TAG,
    params(
        ("date" = Option<String>, Query, description = "Day to check (YYYY-MM-DD, default: today)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attendance status", body = std::collections::BTreeMap<String, bool>),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_attendance_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DateParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Manager])?;

    let status = AttendanceService::new(&state.db)
        .status_map(params.date_or_today()?)
        .await?;

    Ok((StatusCode::OK, Json(status)))
}

/// Get the caller's attendance history, oldest first.
///
/// The range defaults to the first of the current month through today.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - The caller's events within the range
/// - `400 Bad Request` - Malformed date or start after end
/// - `401 Unauthorized` - Missing or invalid access token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/attendance/history",
    tag = ATTENDANCE_TAG,
    params(
        ("start_date" = Option<String>, Query, description = "First day, inclusive (YYYY-MM-DD)"),
        ("end_date" = Option<String>, Query, description = "Last day, inclusive (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attendance history", body = Vec<AttendanceDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_attendance_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DateRangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let start = parse_optional_date(params.start_date.as_deref(), "start_date")?;
    let end = parse_optional_date(params.end_date.as_deref(), "end_date")?;

    let history = AttendanceService::new(&state.db)
        .history(&token.user_id, start, end)
        .await?;

    let dtos: Vec<AttendanceDto> = history.into_iter().map(Attendance::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an attendance event by ID.
///
/// # Access Control
/// - Authenticated - Owner or staff
///
/// # Returns
/// - `200 OK` - The event
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Event belongs to another user
/// - `404 Not Found` - Event not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/attendance/{id}",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = String, Path, description = "Attendance ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attendance", body = AttendanceDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Attendance belongs to another user", body = ErrorDto),
        (status = 404, description = "Attendance not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let attendance = AttendanceService::new(&state.db)
        .get(&Actor::from(&token), &id)
        .await?;

    Ok((StatusCode::OK, Json(attendance.into_dto())))
}

/// Update an attendance event.
///
/// Only the provided fields change.
///
/// # Access Control
/// - Authenticated - Owner or staff
///
/// # Returns
/// - `200 OK` - The updated event
/// - `400 Bad Request` - Unknown type or status, or coordinates out of range
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Event belongs to another user
/// - `404 Not Found` - Event not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/attendance/{id}",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = String, Path, description = "Attendance ID")
    ),
    request_body = UpdateAttendanceDto,
    responses(
        (status = 200, description = "Successfully updated attendance", body = AttendanceDto),
        (status = 400, description = "Invalid attendance data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Attendance belongs to another user", body = ErrorDto),
        (status = 404, description = "Attendance not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let attendance = AttendanceService::new(&state.db)
        .update(&Actor::from(&token), &id, payload)
        .await?;

    Ok((StatusCode::OK, Json(attendance.into_dto())))
}

/// Delete an attendance event.
///
/// # Access Control
/// - Authenticated - Owner or staff
///
/// # Returns
/// - `204 No Content` - Event deleted
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Event belongs to another user
/// - `404 Not Found` - Event not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/attendance/{id}",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = String, Path, description = "Attendance ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted attendance"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Attendance belongs to another user", body = ErrorDto),
        (status = 404, description = "Attendance not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    AttendanceService::new(&state.db)
        .delete(&Actor::from(&token), &id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
