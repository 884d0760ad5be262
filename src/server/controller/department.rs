use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::department::{CreateDepartmentParams, Department, UpdateDepartmentParams},
        service::department::DepartmentService,
        state::AppState,
    },
};

/// Tag for grouping department endpoints in OpenAPI documentation
pub static DEPARTMENT_TAG: &str = "department";

/// Get all departments ordered by name.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Every department
/// - `401 Unauthorized` - Missing or invalid access token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/departments",
    tag = DEPARTMENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved departments", body = Vec<DepartmentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_departments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let departments = DepartmentService::new(&state.db).get_all().await?;

    let dtos: Vec<DepartmentDto> = departments.into_iter().map(Department::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a department.
///
/// The timezone defaults to UTC when omitted.
///
/// # Access Control
/// - `Admin` - Only admins can manage departments
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Department name, location, timezone and optional WFA policy
///
/// # Returns
/// - `201 Created` - The created department
/// - `400 Bad Request` - Missing name or location
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - Name already used by another department
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/admin/departments",
    tag = DEPARTMENT_TAG,
    request_body = CreateDepartmentDto,
    responses(
        (status = 201, description = "Successfully created department", body = DepartmentDto),
        (status = 400, description = "Invalid department data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Department already exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_department(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let department = DepartmentService::new(&state.db)
        .create(CreateDepartmentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(department.into_dto())))
}

/// Update a department.
///
/// # Access Control
/// - `Admin` - Only admins can manage departments
///
/// # Returns
/// - `200 OK` - The updated department
/// - `400 Bad Request` - Blank name or location
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Department not found
/// - `409 Conflict` - Name already used by another department
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/admin/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = String, Path, description = "Department ID")
    ),
    request_body = UpdateDepartmentDto,
    responses(
        (status = 200, description = "Successfully updated department", body = DepartmentDto),
        (status = 400, description = "Invalid department data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Department already exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_department(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let department = DepartmentService::new(&state.db)
        .update(UpdateDepartmentParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(department.into_dto())))
}

/// Delete a department.
///
/// # Access Control
/// - `Admin` - Only admins can manage departments
///
/// # Returns
/// - `204 No Content` - Department deleted
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Department not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/admin/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = String, Path, description = "Department ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted department"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_department(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    DepartmentService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
