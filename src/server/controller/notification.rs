use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        notification::{CreateNotificationDto, NotificationDto, UpdateNotificationStatusDto},
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{actor::Actor, notification::Notification},
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Send a notification to a user.
///
/// # Access Control
/// - `Staff` - Admin and HR only
///
/// # Returns
/// - `201 Created` - The stored unread notification
/// - `400 Bad Request` - Unknown type or empty message
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not staff
/// - `404 Not Found` - Recipient not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/notification",
    tag = NOTIFICATION_TAG,
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Successfully created notification", body = NotificationDto),
        (status = 400, description = "Invalid notification data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Staff])?;

    let notification = NotificationService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}

/// Get the caller's notifications, newest first.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - One page of notifications
/// - `401 Unauthorized` - Missing or invalid access token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/notification",
    tag = NOTIFICATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved notifications", body = PageDto<NotificationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let page = NotificationService::new(&state.db)
        .list(&token.user_id, params.page_params())
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Notification::into_dto))))
}

/// Get a notification by ID.
///
/// # Access Control
/// - Authenticated - Recipient or staff
///
/// # Returns
/// - `200 OK` - The notification
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Notification belongs to another user
/// - `404 Not Found` - Notification not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/notification/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = String, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved notification", body = NotificationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Notification belongs to another user", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let notification = NotificationService::new(&state.db)
        .get(&Actor::from(&token), &id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

/// Mark a notification read or unread.
///
/// # Access Control
/// - Authenticated - Recipient or staff
///
/// # Returns
/// - `200 OK` - The updated notification
/// - `400 Bad Request` - Unknown status
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Notification belongs to another user
/// - `404 Not Found` - Notification not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/notification/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = String, Path, description = "Notification ID")
    ),
    request_body = UpdateNotificationStatusDto,
    responses(
        (status = 200, description = "Successfully updated notification", body = NotificationDto),
        (status = 400, description = "Invalid notification status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Notification belongs to another user", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_notification_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateNotificationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let notification = NotificationService::new(&state.db)
        .update_status(&Actor::from(&token), &id, payload)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

/// Delete a notification.
///
/// # Access Control
/// - Authenticated - Recipient or staff
///
/// # Returns
/// - `204 No Content` - Notification deleted
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Notification belongs to another user
/// - `404 Not Found` - Notification not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/notification/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = String, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted notification"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Notification belongs to another user", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    NotificationService::new(&state.db)
        .delete(&Actor::from(&token), &id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
