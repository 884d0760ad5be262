use thiserror::Error;

/// Failures raised by a cache backend.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Redis command or connection failure.
    #[error(transparent)]
    Redis(#[from] redis::RedisError),

    /// Cached payload could not be encoded or decoded.
    #[error("Failed to (de)serialize cached value: {0}")]
    Serialization(#[from] serde_json::Error),
}
