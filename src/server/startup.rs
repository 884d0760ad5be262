use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{
    cache::{memory::MemoryCache, redis::RedisCache, Cache},
    config::Config,
    error::AppError,
};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `info`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the cache backend.
///
/// Connects to Redis when `REDIS_URL` is configured; otherwise falls back to an in-process
/// cache, which is only suitable for a single server instance.
///
/// # Arguments
/// - `config` - Application configuration containing the optional Redis URL
///
/// # Returns
/// - `Ok(Arc<dyn Cache>)` - Ready cache backend
/// - `Err(AppError::CacheErr)` - Redis URL is invalid or the server is unreachable
pub async fn connect_to_cache(config: &Config) -> Result<Arc<dyn Cache>, AppError> {
    match &config.redis_url {
        Some(url) => {
            let cache = RedisCache::connect(url).await?;
            tracing::info!("Connected to Redis cache");
            Ok(Arc::new(cache))
        }
        None => {
            tracing::warn!("REDIS_URL not set, using in-process cache");
            Ok(Arc::new(MemoryCache::new()))
        }
    }
}
