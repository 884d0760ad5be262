//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. Every field is cheap to clone: the database handle is
//! a pool, the cache sits behind an `Arc`, and the token keys are shared internally.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{cache::Cache, util::token::TokenMaker};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Read-through cache for user lookups.
    pub cache: Arc<dyn Cache>,

    /// Issues and verifies access and refresh tokens.
    pub tokens: TokenMaker,

    /// Application name reported by `GET /`.
    pub app_name: String,

    /// Application version reported by `GET /`.
    pub app_version: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `cache` - Cache backend
    /// - `tokens` - Token issuer and verifier
    /// - `app_name` - Application name
    /// - `app_version` - Application version
    pub fn new(
        db: DatabaseConnection,
        cache: Arc<dyn Cache>,
        tokens: TokenMaker,
        app_name: String,
        app_version: String,
    ) -> Self {
        Self {
            db,
            cache,
            tokens,
            app_name,
            app_version,
        }
    }
}
