//! Bearer-token authentication and role gating for API handlers.
//!
//! Handlers construct an [`AuthGuard`] from the request headers and call
//! [`AuthGuard::require`] with the permissions the endpoint needs. The guard verifies the
//! access token and checks the caller's role against every requested permission.

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::{
    model::user::UserRole,
    server::{
        error::{auth::AuthError, AppError},
        util::token::{TokenMaker, TokenPayload},
    },
};

const BEARER: &str = "bearer";

/// Role requirements an endpoint can place on the caller.
pub enum Permission {
    /// Administrators only.
    Admin,
    /// Administrators and HR staff.
    Staff,
    /// Administrators, HR staff and managers.
    Manager,
}

impl Permission {
    fn allows(&self, role: UserRole) -> bool {
        match self {
            Self::Admin => role == UserRole::Admin,
            Self::Staff => matches!(role, UserRole::Admin | UserRole::Hr),
            Self::Manager => matches!(role, UserRole::Admin | UserRole::Hr | UserRole::Manager),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Self::Admin => "admin permission",
            Self::Staff => "staff permission",
            Self::Manager => "manager permission",
        }
    }
}

pub struct AuthGuard<'a> {
    tokens: &'a TokenMaker,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenMaker, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Authenticates the request and checks the caller's role.
    ///
    /// An empty permission list only requires a valid access token.
    ///
    /// # Arguments
    /// - `permissions` - Every permission the caller must satisfy
    ///
    /// # Returns
    /// - `Ok(TokenPayload)` - Verified claims of the caller
    /// - `Err(AuthError::MissingHeader)` - No `Authorization` header
    /// - `Err(AuthError::InvalidHeaderFormat)` - Header is not `<scheme> <token>`
    /// - `Err(AuthError::UnsupportedType)` - Scheme is not `Bearer`
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    /// - `Err(AuthError::AccessDenied)` - Caller's role does not satisfy a permission
    pub fn require(&self, permissions: &[Permission]) -> Result<TokenPayload, AppError> {
        let token = bearer_token(self.headers)?;
        let payload = self.tokens.verify_access_token(token)?;

        for permission in permissions {
            if !permission.allows(payload.role) {
                return Err(AuthError::AccessDenied(
                    payload.user_id,
                    format!(
                        "{} role lacks required {}",
                        payload.role,
                        permission.describe()
                    ),
                )
                .into());
            }
        }

        Ok(payload)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidHeaderFormat)?;

    let fields: Vec<&str> = value.split_whitespace().collect();
    let [scheme, token] = fields.as_slice() else {
        return Err(AuthError::InvalidHeaderFormat);
    };

    if !scheme.eq_ignore_ascii_case(BEARER) {
        return Err(AuthError::UnsupportedType);
    }

    Ok(token)
}
