use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        device::{CreateDeviceDto, CreateDeviceLogDto, DeviceDto, DeviceLogDto, UpdateDeviceDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::device::{Device, DeviceLog},
        service::device::DeviceService,
        state::AppState,
    },
};

/// Tag for grouping attendance device endpoints in OpenAPI documentation
pub static DEVICE_TAG: &str = "device";

/// Get all attendance devices.
///
/// # Access Control
/// - `Admin` - Only admins can manage devices
///
/// # Returns
/// - `200 OK` - Every device ordered by name
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/admin/devices",
    tag = DEVICE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved devices", body = Vec<DeviceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_devices(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let devices = DeviceService::new(&state.db).get_all().await?;

    let dtos: Vec<DeviceDto> = devices.into_iter().map(Device::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a device by ID.
///
/// # Access Control
/// - `Admin` - Only admins can manage devices
///
/// # Returns
/// - `200 OK` - The device
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Device not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/admin/devices/{id}",
    tag = DEVICE_TAG,
    params(
        ("id" = String, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved device", body = DeviceDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_device(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let device = DeviceService::new(&state.db).get(&id).await?;

    Ok((StatusCode::OK, Json(device.into_dto())))
}

/// Register a device.
///
/// Status defaults to active.
///
/// # Access Control
/// - `Admin` - Only admins can manage devices
///
/// # Returns
/// - `201 Created` - The registered device
/// - `400 Bad Request` - Missing name or unknown type or status
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/admin/devices",
    tag = DEVICE_TAG,
    request_body = CreateDeviceDto,
    responses(
        (status = 201, description = "Successfully created device", body = DeviceDto),
        (status = 400, description = "Invalid device data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_device(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDeviceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let device = DeviceService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(device.into_dto())))
}

/// Update a device.
///
/// # Access Control
/// - `Admin` - Only admins can manage devices
///
/// # Returns
/// - `200 OK` - The updated device
/// - `400 Bad Request` - Unknown type or status
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Device not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/admin/devices/{id}",
    tag = DEVICE_TAG,
    params(
        ("id" = String, Path, description = "Device ID")
    ),
    request_body = UpdateDeviceDto,
    responses(
        (status = 200, description = "Successfully updated device", body = DeviceDto),
        (status = 400, description = "Invalid device data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_device(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateDeviceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let device = DeviceService::new(&state.db).update(&id, payload).await?;

    Ok((StatusCode::OK, Json(device.into_dto())))
}

/// Delete a device together with its logs.
///
/// # Access Control
/// - `Admin` - Only admins can manage devices
///
/// # Returns
/// - `204 No Content` - Device deleted
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Device not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/admin/devices/{id}",
    tag = DEVICE_TAG,
    params(
        ("id" = String, Path, description = "Device ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted device"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_device(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    DeviceService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Record a device event.
///
/// Also stamps the device's last check time.
///
/// # Access Control
/// - `Admin` - Only admins can manage devices
///
/// # Returns
/// - `201 Created` - The stored log entry
/// - `400 Bad Request` - Missing action
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Device not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/admin/devices/{id}/logs",
    tag = DEVICE_TAG,
    params(
        ("id" = String, Path, description = "Device ID")
    ),
    request_body = CreateDeviceLogDto,
    responses(
        (status = 201, description = "Successfully recorded device log", body = DeviceLogDto),
        (status = 400, description = "Invalid log data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_device_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<CreateDeviceLogDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let log = DeviceService::new(&state.db).add_log(&id, payload).await?;

    Ok((StatusCode::CREATED, Json(log.into_dto())))
}

/// Get a device's logs, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can manage devices
///
/// # Returns
/// - `200 OK` - The device's log entries
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Device not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/admin/devices/{id}/logs",
    tag = DEVICE_TAG,
    params(
        ("id" = String, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved device logs", body = Vec<DeviceLogDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_device_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let logs = DeviceService::new(&state.db).get_logs(&id).await?;

    let dtos: Vec<DeviceLogDto> = logs.into_iter().map(DeviceLog::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
