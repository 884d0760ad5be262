//! Identity of the authenticated caller as seen by the service layer.

use crate::{
    model::user::UserRole,
    server::{error::auth::AuthError, util::token::TokenPayload},
};

/// Authenticated caller of a service operation.
///
/// Services receive the actor instead of raw token claims so ownership rules can be
/// checked without depending on the HTTP layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub user_id: String,
    pub role: UserRole,
}

impl Actor {
    pub fn new(user_id: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    /// Admins and HR staff, who may access every user's records.
    pub fn is_staff(&self) -> bool {
        matches!(self.role, UserRole::Admin | UserRole::Hr)
    }

    /// Staff and managers, who may read every user's schedules.
    pub fn is_manager(&self) -> bool {
        self.is_staff() || self.role == UserRole::Manager
    }

    /// Checks that the actor may touch a record owned by `owner_id`.
    ///
    /// # Arguments
    /// - `owner_id` - User ID the record belongs to
    /// - `action` - Description of the attempted action for logging
    ///
    /// # Returns
    /// - `Ok(())` - Actor is staff or owns the record
    /// - `Err(AuthError::AccessDenied)` - Record belongs to someone else
    pub fn ensure_owner_or_staff(&self, owner_id: &str, action: &str) -> Result<(), AuthError> {
        if self.is_staff() || self.user_id == owner_id {
            return Ok(());
        }

        Err(AuthError::AccessDenied(
            self.user_id.clone(),
            format!("attempted to {} owned by user {}", action, owner_id),
        ))
    }
}

impl From<&TokenPayload> for Actor {
    fn from(payload: &TokenPayload) -> Self {
        Self::new(payload.user_id.clone(), payload.role)
    }
}
