use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::{
    model::user::UserRole,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        util::token::TokenMaker,
    },
};

mod header;
mod require;

fn tokens() -> TokenMaker {
    TokenMaker::new("access-secret", "refresh-secret", 60, 120)
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

fn bearer_for(tokens: &TokenMaker, role: UserRole) -> HeaderMap {
    let token = tokens
        .create_access_token("user-1", "user@example.com", role, "emp-1")
        .unwrap();
    headers_with(&format!("Bearer {}", token))
}
