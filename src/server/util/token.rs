//! Signed access and refresh tokens.
//!
//! Both token kinds are HS256 JWTs. Access tokens carry the caller's identity and role and
//! authorize API requests; refresh tokens carry only the identity and are exchanged for a
//! new access token. The two kinds are signed with different secrets so one can never be
//! presented as the other.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    model::user::UserRole,
    server::{config::Config, error::auth::AuthError},
};

/// Claims of an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
    pub employee_id: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Claims of a refresh token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshPayload {
    pub user_id: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

struct Keys {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl: TimeDelta,
    refresh_ttl: TimeDelta,
}

/// Issues and verifies access and refresh tokens.
///
/// Cheap to clone; the keys are shared behind an `Arc`.
#[derive(Clone)]
pub struct TokenMaker {
    keys: Arc<Keys>,
}

impl TokenMaker {
    /// Creates a token maker from raw secrets and lifetimes.
    ///
    /// # Arguments
    /// - `access_secret` - HMAC secret for access tokens
    /// - `refresh_secret` - HMAC secret for refresh tokens
    /// - `access_minutes` - Access token lifetime in minutes
    /// - `refresh_minutes` - Refresh token lifetime in minutes
    pub fn new(
        access_secret: &str,
        refresh_secret: &str,
        access_minutes: i64,
        refresh_minutes: i64,
    ) -> Self {
        Self {
            keys: Arc::new(Keys {
                access_encoding: EncodingKey::from_secret(access_secret.as_bytes()),
                access_decoding: DecodingKey::from_secret(access_secret.as_bytes()),
                refresh_encoding: EncodingKey::from_secret(refresh_secret.as_bytes()),
                refresh_decoding: DecodingKey::from_secret(refresh_secret.as_bytes()),
                access_ttl: TimeDelta::minutes(access_minutes),
                refresh_ttl: TimeDelta::minutes(refresh_minutes),
            }),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_secret,
            &config.jwt_refresh_secret,
            config.access_token_minutes,
            config.refresh_token_minutes,
        )
    }

    /// Access token lifetime in seconds, reported to clients as `expires_in`.
    pub fn access_ttl_seconds(&self) -> i64 {
        self.keys.access_ttl.num_seconds()
    }

    /// Signs a new access token for the given identity.
    ///
    /// # Arguments
    /// - `user_id` - ID of the authenticated user
    /// - `email` - User's email
    /// - `role` - User's role, used for permission checks
    /// - `employee_id` - ID of the user's employee record
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AuthError::TokenCreation)` - Signing failed
    pub fn create_access_token(
        &self,
        user_id: &str,
        email: &str,
        role: UserRole,
        employee_id: &str,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = TokenPayload {
            user_id: user_id.to_string(),
            email: email.to_string(),
            role,
            employee_id: employee_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.keys.access_ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.access_encoding)
            .map_err(AuthError::TokenCreation)
    }

    /// Signs a new refresh token for the given identity.
    pub fn create_refresh_token(&self, user_id: &str, email: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = RefreshPayload {
            user_id: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.keys.refresh_ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.refresh_encoding)
            .map_err(AuthError::TokenCreation)
    }

    /// Verifies an access token's signature and expiry.
    ///
    /// # Returns
    /// - `Ok(TokenPayload)` - Claims of a valid token
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed token, or expired
    pub fn verify_access_token(&self, token: &str) -> Result<TokenPayload, AuthError> {
        decode::<TokenPayload>(
            token,
            &self.keys.access_decoding,
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(AuthError::InvalidToken)
    }

    /// Verifies a refresh token's signature and expiry.
    pub fn verify_refresh_token(&self, token: &str) -> Result<RefreshPayload, AuthError> {
        decode::<RefreshPayload>(
            token,
            &self.keys.refresh_decoding,
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(AuthError::InvalidToken)
    }
}
