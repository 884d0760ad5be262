//! Authentication results.

use crate::{model::auth::TokenDto, server::model::user::User};

pub const TOKEN_TYPE: &str = "Bearer";

/// Tokens issued by login or refresh, together with the authenticated user.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: User,
}

impl AuthTokens {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: self.expires_in,
            user: self.user.into_dto(),
        }
    }
}
