use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        work_location::{CreateWorkLocationDto, UpdateWorkLocationDto, WorkLocationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::work_location::{CreateWorkLocationParams, UpdateWorkLocationParams, WorkLocation},
        service::work_location::WorkLocationService,
        state::AppState,
    },
};

/// Tag for grouping work location endpoints in OpenAPI documentation
pub static WORK_LOCATION_TAG: &str = "work-location";

/// Get all work locations.
///
/// # Access Control
/// - `Admin` - Only admins can manage work locations
///
/// # Returns
/// - `200 OK` - Every work location
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/admin/work-locations",
    tag = WORK_LOCATION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved work locations", body = Vec<WorkLocationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_work_locations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let locations = WorkLocationService::new(&state.db).get_all().await?;

    let dtos: Vec<WorkLocationDto> = locations.into_iter().map(WorkLocation::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a work location by ID.
///
/// # Access Control
/// - `Admin` - Only admins can manage work locations
///
/// # Returns
/// - `200 OK` - The work location
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Work location not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/admin/work-locations/{id}",
    tag = WORK_LOCATION_TAG,
    params(
        ("id" = String, Path, description = "Work location ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved work location", body = WorkLocationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Work location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_work_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let location = WorkLocationService::new(&state.db).get(&id).await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Create a work location.
///
/// # Access Control
/// - `Admin` - Only admins can manage work locations
///
/// # Returns
/// - `201 Created` - The created work location
/// - `400 Bad Request` - Missing name
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/admin/work-locations",
    tag = WORK_LOCATION_TAG,
    request_body = CreateWorkLocationDto,
    responses(
        (status = 201, description = "Successfully created work location", body = WorkLocationDto),
        (status = 400, description = "Invalid work location data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_work_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateWorkLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let location = WorkLocationService::new(&state.db)
        .create(CreateWorkLocationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(location.into_dto())))
}

/// Update a work location.
///
/// # Access Control
/// - `Admin` - Only admins can manage work locations
///
/// # Returns
/// - `200 OK` - The updated work location
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Work location not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/admin/work-locations/{id}",
    tag = WORK_LOCATION_TAG,
    params(
        ("id" = String, Path, description = "Work location ID")
    ),
    request_body = UpdateWorkLocationDto,
    responses(
        (status = 200, description = "Successfully updated work location", body = WorkLocationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Work location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_work_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateWorkLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let location = WorkLocationService::new(&state.db)
        .update(UpdateWorkLocationParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Delete a work location.
///
/// # Access Control
/// - `Admin` - Only admins can manage work locations
///
/// # Returns
/// - `204 No Content` - Work location deleted
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Work location not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/admin/work-locations/{id}",
    tag = WORK_LOCATION_TAG,
    params(
        ("id" = String, Path, description = "Work location ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted work location"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Work location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_work_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    WorkLocationService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
