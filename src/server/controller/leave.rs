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
        leave::{
            CreateLeaveRequestDto, LeaveBalanceDto, LeaveRequestDto, LeaveStatus, LeaveType,
            RejectLeaveDto, UpdateLeaveRequestDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{actor::Actor, leave::LeaveRequest, page::PageParams},
        service::{leave::LeaveService, parse_enum},
        state::AppState,
    },
};

/// Tag for grouping leave request endpoints in OpenAPI documentation
pub static LEAVE_TAG: &str = "leave";

#[derive(Deserialize)]
pub struct LeaveListParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct LeaveBalanceParams {
    #[serde(rename = "type")]
    pub leave_type: Option<String>,
    pub user_id: Option<String>,
}

/// Submit a leave request.
///
/// The request starts out pending and the caller is notified in the background.
///
/// # Access Control
/// - Authenticated - The request is filed for the caller
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Leave type, start and end dates (YYYY-MM-DD) and reason
///
/// # Returns
/// - `201 Created` - The pending request
/// - `400 Bad Request` - Unknown type, malformed dates, start after end, or missing reason
/// - `401 Unauthorized` - Missing or invalid access token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/leave",
    tag = LEAVE_TAG,
    request_body = CreateLeaveRequestDto,
    responses(
        (status = 201, description = "Successfully submitted leave request", body = LeaveRequestDto),
        (status = 400, description = "Invalid leave request data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_leave_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLeaveRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let request = LeaveService::new(&state.db)
        .submit(&token.user_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// Get a paginated list of leave requests, newest first.
///
/// Staff see every request; everyone else only sees their own.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - One page of leave requests
/// - `400 Bad Request` - Unknown status filter
/// - `401 Unauthorized` - Missing or invalid access token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/leave",
    tag = LEAVE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("status" = Option<String>, Query, description = "Only requests in this status (pending, approved or rejected)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved leave requests", body = PageDto<LeaveRequestDto>),
        (status = 400, description = "Invalid status filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_leave_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<LeaveListParams>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let status = params
        .status
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(parse_enum::<LeaveStatus>)
        .transpose()?;

    let page = LeaveService::new(&state.db)
        .list(
            &Actor::from(&token),
            status,
            PageParams::new(params.page, params.limit),
        )
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(LeaveRequest::into_dto))))
}

/// Get a leave request by ID.
///
/// # Access Control
/// - Authenticated - Owner or staff
///
/// # Returns
/// - `200 OK` - The leave request
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Request belongs to another user
/// - `404 Not Found` - Request not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/leave/{id}",
    tag = LEAVE_TAG,
    params(
        ("id" = String, Path, description = "Leave request ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved leave request", body = LeaveRequestDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Leave request belongs to another user", body = ErrorDto),
        (status = 404, description = "Leave request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_leave_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let request = LeaveService::new(&state.db)
        .get(&Actor::from(&token), &id)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Update a pending leave request.
///
/// # Access Control
/// - Authenticated - Owner or staff
///
/// # Returns
/// - `200 OK` - The updated request
/// - `400 Bad Request` - Request no longer pending, or invalid type or dates
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Request belongs to another user
/// - `404 Not Found` - Request not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/leave/{id}",
    tag = LEAVE_TAG,
    params(
        ("id" = String, Path, description = "Leave request ID")
    ),
    request_body = UpdateLeaveRequestDto,
    responses(
        (status = 200, description = "Successfully updated leave request", body = LeaveRequestDto),
        (status = 400, description = "Invalid leave request data or not pending", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Leave request belongs to another user", body = ErrorDto),
        (status = 404, description = "Leave request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_leave_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateLeaveRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let request = LeaveService::new(&state.db)
        .update(&Actor::from(&token), &id, payload)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Delete a leave request.
///
/// # Access Control
/// - Authenticated - Owner or staff
///
/// # Returns
/// - `204 No Content` - Request deleted
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Request belongs to another user
/// - `404 Not Found` - Request not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/leave/{id}",
    tag = LEAVE_TAG,
    params(
        ("id" = String, Path, description = "Leave request ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted leave request"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Leave request belongs to another user", body = ErrorDto),
        (status = 404, description = "Leave request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_leave_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    LeaveService::new(&state.db)
        .delete(&Actor::from(&token), &id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Approve a pending leave request.
///
/// Records the caller as reviewer and notifies the requester.
///
/// # Access Control
/// - `Staff` - Admin and HR only
///
/// # Returns
/// - `200 OK` - The approved request
/// - `400 Bad Request` - Request is not pending
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not staff
/// - `404 Not Found` - Request not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/leave/admin/approve/{id}",
    tag = LEAVE_TAG,
    params(
        ("id" = String, Path, description = "Leave request ID")
    ),
    responses(
        (status = 200, description = "Successfully approved leave request", body = LeaveRequestDto),
        (status = 400, description = "Leave request is not in pending status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Leave request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn approve_leave_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Staff])?;

    let request = LeaveService::new(&state.db)
        .approve(&token.user_id, &id)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Reject a pending leave request.
///
/// Records the caller as reviewer, stores the optional note and notifies the requester.
///
/// # Access Control
/// - `Staff` - Admin and HR only
///
/// # Returns
/// - `200 OK` - The rejected request
/// - `400 Bad Request` - Request is not pending
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not staff
/// - `404 Not Found` - Request not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/leave/admin/reject/{id}",
    tag = LEAVE_TAG,
    params(
        ("id" = String, Path, description = "Leave request ID")
    ),
    request_body = RejectLeaveDto,
    responses(
        (status = 200, description = "Successfully rejected leave request", body = LeaveRequestDto),
        (status = 400, description = "Leave request is not in pending status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Leave request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn reject_leave_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<RejectLeaveDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Staff])?;

    let request = LeaveService::new(&state.db)
        .reject(&token.user_id, &id, payload.note)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Get a user's remaining leave for the current year.
///
/// Computed for `user_id`, or for the caller when omitted.
///
/// # Access Control
/// - `Staff` - Admin and HR only
///
/// # Returns
/// - `200 OK` - Entitlement, used days and remaining days
/// - `400 Bad Request` - Missing or unknown leave type
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not staff
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/leave/admin/balance",
    tag = LEAVE_TAG,
    params(
        ("type" = String, Query, description = "Leave type"),
        ("user_id" = Option<String>, Query, description = "User to compute the balance for (default: caller)")
    ),
    responses(
        (status = 200, description = "Successfully computed leave balance", body = LeaveBalanceDto),
        (status = 400, description = "Invalid leave type", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_leave_balance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<LeaveBalanceParams>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Staff])?;

    let leave_type = parse_enum::<LeaveType>(params.leave_type.as_deref().unwrap_or_default())?;
    let user_id = params.user_id.unwrap_or(token.user_id);

    let balance = LeaveService::new(&state.db)
        .balance(&user_id, leave_type)
        .await?;

    Ok((StatusCode::OK, Json(balance.into_dto())))
}
