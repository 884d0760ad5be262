use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request has no `Authorization` header.
    #[error("authorization header is not provided")]
    MissingHeader,

    /// `Authorization` header is not of the form `<scheme> <token>`.
    #[error("authorization header format is invalid")]
    InvalidHeaderFormat,

    /// `Authorization` header uses a scheme other than `Bearer`.
    #[error("authorization type is not supported")]
    UnsupportedType,

    /// Token signature, structure or expiry check failed.
    #[error("token is invalid or has expired: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Token could not be signed.
    #[error("failed to create token: {0}")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),

    /// Email is unknown or the password does not match.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks the role or ownership required for the resource.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Description of the attempted action for logging
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),

    /// Password hashing or verification failed inside bcrypt.
    #[error("password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - Header problems and `InvalidCredentials` → 401 Unauthorized with the error text
/// - `InvalidToken` → 401 Unauthorized with a generic token message
/// - `AccessDenied` → 403 Forbidden with "user is forbidden to access the resource"
/// - `TokenCreation` / `PasswordHash` → 500 Internal Server Error with generic message
///
/// Denials are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingHeader
            | Self::InvalidHeaderFormat
            | Self::UnsupportedType
            | Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken(ref err) => {
                tracing::debug!("Rejected token: {}", err);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "access token is invalid or has expired".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "user is forbidden to access the resource".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::TokenCreation(_) | Self::PasswordHash(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
