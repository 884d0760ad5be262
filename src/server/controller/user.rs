use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        user::{CreateUserDto, UpdateProfileDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::User,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static ADMIN_USER_TAG: &str = "admin-user";

/// Get the authenticated user's profile.
///
/// Served from the cache when present.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - The caller's user record
/// - `401 Unauthorized` - Missing or invalid access token
/// - `404 Not Found` - User was deleted since the token was issued
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/user/profile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved profile", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let payload = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let user = UserService::new(&state.db, state.cache.as_ref())
        .get_user(&payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the authenticated user's profile.
///
/// Only full name, password, location, timezone and photo URL can be changed here.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid field value
/// - `401 Unauthorized` - Missing or invalid access token
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    put,
    path = "/api/v1/user/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Successfully updated profile", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let user = UserService::new(&state.db, state.cache.as_ref())
        .update_profile(&token.user_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get a paginated list of users.
///
/// # Access Control
/// - `Staff` - Admin and HR only
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `headers` - Request headers carrying the bearer token
/// - `params` - Pagination parameters (page and limit)
///
/// # Returns
/// - `200 OK` - One page of users
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not staff
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    tag = ADMIN_USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PageDto<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Staff])?;

    let page = UserService::new(&state.db, state.cache.as_ref())
        .get_users(params.page_params())
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(User::into_dto))))
}

/// Create a user with an employee record.
///
/// Same as registration, except the role can be chosen.
///
/// # Access Control
/// - `Staff` - Admin and HR only
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid user data or role
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not staff
/// - `404 Not Found` - Department does not exist
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/v1/admin/users",
    tag = ADMIN_USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Email already exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Staff])?;

    let user = UserService::new(&state.db, state.cache.as_ref())
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get a user by ID.
///
/// # Access Control
/// - `Staff` - Admin and HR only
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not staff
/// - `404 Not Found` - No live user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/admin/users/{id}",
    tag = ADMIN_USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Staff])?;

    let user = UserService::new(&state.db, state.cache.as_ref())
        .get_user(&id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user.
///
/// # Access Control
/// - `Staff` - Admin and HR only
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid role, status or field value
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not staff
/// - `404 Not Found` - User not found
/// - `409 Conflict` - Email belongs to another user
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    put,
    path = "/api/v1/admin/users/{id}",
    tag = ADMIN_USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Staff])?;

    let user = UserService::new(&state.db, state.cache.as_ref())
        .update_user(&id, payload)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Soft-delete a user.
///
/// # Access Control
/// - `Staff` - Admin and HR only
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not staff
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/admin/users/{id}",
    tag = ADMIN_USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Staff])?;

    UserService::new(&state.db, state.cache.as_ref())
        .delete_user(&id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
