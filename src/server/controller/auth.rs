use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RefreshTokenDto, RegisterDto, TokenDto},
        user::UserDto,
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the user together with an employee record in the requested department,
/// defaulting to "Information Technology". New accounts always get the employee role.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `payload` - Email, password, full name and optional department name
///
/// # Returns
/// - `201 Created` - The registered user
/// - `400 Bad Request` - Invalid email, password shorter than 6 characters, or empty name
/// - `404 Not Found` - Department does not exist
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Successfully registered user", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Email already exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, state.cache.as_ref(), &state.tokens);

    let user = service.register(payload).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection and token keys
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - Access token, refresh token and the user
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `404 Not Found` - User has no employee record
/// - `500 Internal Server Error` - Database or token signing error
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, state.cache.as_ref(), &state.tokens);

    let tokens = service.login(payload).await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Exchange a refresh token for a new access token.
///
/// The refresh token itself is returned unchanged.
///
/// # Access Control
/// - Public, but requires a valid refresh token
///
/// # Returns
/// - `200 OK` - New access token and the user
/// - `401 Unauthorized` - Refresh token invalid or expired
/// - `404 Not Found` - User or employee no longer exists
/// - `500 Internal Server Error` - Database or token signing error
#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh-token",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "Successfully refreshed token", body = TokenDto),
        (status = 401, description = "Invalid or expired refresh token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, state.cache.as_ref(), &state.tokens);

    let tokens = service.refresh(payload).await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}
