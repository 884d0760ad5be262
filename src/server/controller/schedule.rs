use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        schedule::{
            CreateScheduleDto, ScheduleDto, ScheduleSwapDto, ScheduleSwapRequestDto,
            UpdateScheduleDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{actor::Actor, schedule::Schedule},
        service::schedule::ScheduleService,
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

#[derive(Deserialize)]
pub struct ScheduleListParams {
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CalendarParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Create a schedule.
///
/// # Access Control
/// - `Manager` - Admin, HR and managers
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - User, date, shift and break times (HH:MM), work location and type
///
/// # Returns
/// - `201 Created` - The created schedule
/// - `400 Bad Request` - Malformed times, shift start not before end, or break outside the shift
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not a manager
/// - `404 Not Found` - User or work location not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/schedule",
    tag = SCHEDULE_TAG,
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Successfully created schedule", body = ScheduleDto),
        (status = 400, description = "Invalid schedule data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "User or work location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Manager])?;

    let schedule = ScheduleService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(schedule.into_dto())))
}

/// Get schedules ordered by date.
///
/// Managers and staff see every schedule and may filter by user; everyone else only
/// sees their own and the filter is ignored.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Matching schedules
/// - `401 Unauthorized` - Missing or invalid access token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/schedule",
    tag = SCHEDULE_TAG,
    params(
        ("user_id" = Option<String>, Query, description = "Only schedules of this user")
    ),
    responses(
        (status = 200, description = "Successfully retrieved schedules", body = Vec<ScheduleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_schedules(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ScheduleListParams>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let schedules = ScheduleService::new(&state.db)
        .list(&Actor::from(&token), params.user_id.as_deref())
        .await?;

    let dtos: Vec<ScheduleDto> = schedules.into_iter().map(Schedule::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the caller's next shift.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Earliest schedule dated today or later
/// - `401 Unauthorized` - Missing or invalid access token
/// - `404 Not Found` - No upcoming schedule
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/schedule/rotation",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved next schedule", body = ScheduleDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "No upcoming schedule", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_schedule_rotation(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let schedule = ScheduleService::new(&state.db)
        .rotation(&token.user_id)
        .await?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// Get the caller's schedules for one month.
///
/// Year and month default to the current UTC month.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Schedules within the month
/// - `400 Bad Request` - Month outside 1 through 12
/// - `401 Unauthorized` - Missing or invalid access token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/schedule/calendar",
    tag = SCHEDULE_TAG,
    params(
        ("year" = Option<i32>, Query, description = "Calendar year (default: current)"),
        ("month" = Option<u32>, Query, description = "Month 1-12 (default: current)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved calendar", body = Vec<ScheduleDto>),
        (status = 400, description = "Invalid month", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_schedule_calendar(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CalendarParams>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let today = Utc::now().date_naive();
    let year = params.year.unwrap_or(today.year());
    let month = params.month.unwrap_or(today.month());

    let schedules = ScheduleService::new(&state.db)
        .calendar(&token.user_id, year, month)
        .await?;

    let dtos: Vec<ScheduleDto> = schedules.into_iter().map(Schedule::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Request to swap one of the caller's shifts with another.
///
/// # Access Control
/// - Authenticated - The first schedule must belong to the caller
///
/// # Returns
/// - `201 Created` - The pending swap request
/// - `400 Bad Request` - Both IDs refer to the same schedule
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - First schedule belongs to another user
/// - `404 Not Found` - Either schedule not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/schedule/swap",
    tag = SCHEDULE_TAG,
    request_body = ScheduleSwapDto,
    responses(
        (status = 201, description = "Successfully requested schedule swap", body = ScheduleSwapRequestDto),
        (status = 400, description = "Invalid swap request", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Schedule belongs to another user", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn swap_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ScheduleSwapDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let request = ScheduleService::new(&state.db)
        .swap(&Actor::from(&token), payload)
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// Get a schedule by ID.
///
/// # Access Control
/// - Authenticated - Owner, managers or staff
///
/// # Returns
/// - `200 OK` - The schedule
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Schedule belongs to another user
/// - `404 Not Found` - Schedule not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/schedule/{id}",
    tag = SCHEDULE_TAG,
    params(
        ("id" = String, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved schedule", body = ScheduleDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Schedule belongs to another user", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let schedule = ScheduleService::new(&state.db)
        .get(&Actor::from(&token), &id)
        .await?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// Update a schedule.
///
/// Only the provided fields change; the merged shift is validated again.
///
/// # Access Control
/// - `Manager` - Admin, HR and managers
///
/// # Returns
/// - `200 OK` - The updated schedule
/// - `400 Bad Request` - Malformed times or invalid shift
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not a manager
/// - `404 Not Found` - Schedule or work location not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/schedule/{id}",
    tag = SCHEDULE_TAG,
    params(
        ("id" = String, Path, description = "Schedule ID")
    ),
    request_body = UpdateScheduleDto,
    responses(
        (status = 200, description = "Successfully updated schedule", body = ScheduleDto),
        (status = 400, description = "Invalid schedule data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Manager])?;

    let schedule = ScheduleService::new(&state.db).update(&id, payload).await?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// Delete a schedule.
///
/// # Access Control
/// - `Manager` - Admin, HR and managers
///
/// # Returns
/// - `204 No Content` - Schedule deleted
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not a manager
/// - `404 Not Found` - Schedule not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/schedule/{id}",
    tag = SCHEDULE_TAG,
    params(
        ("id" = String, Path, description = "Schedule ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted schedule"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Manager])?;

    ScheduleService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
