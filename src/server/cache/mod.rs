//! Key-value cache used as a read-through layer in front of the database.
//!
//! Services talk to the cache through the [`Cache`] trait so the backend can be Redis in
//! production and an in-process map in development and tests. Values are JSON strings;
//! [`get_json`] and [`set_json`] wrap the (de)serialization.
//!
//! Cache failures never fail a request: the helpers in this module log them and behave
//! like a miss, so the database stays the source of truth.

pub mod key;
pub mod memory;
pub mod redis;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

use crate::server::error::cache::CacheError;

#[async_trait]
pub trait Cache: Send + Sync {
    /// Returns the value stored under `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value` under `key`. A `ttl` of `None` keeps the entry until deleted.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError>;

    /// Removes a single key. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Removes every key starting with `prefix`.
    async fn delete_by_prefix(&self, prefix: &str) -> Result<(), CacheError>;
}

/// Reads and decodes a JSON value, treating any cache failure as a miss.
///
/// # Arguments
/// - `cache` - Cache backend
/// - `key` - Key to read
///
/// # Returns
/// - `Some(T)` - Cache hit that decoded successfully
/// - `None` - Miss, backend failure, or undecodable payload (the latter two are logged)
pub async fn get_json<T: DeserializeOwned>(cache: &dyn Cache, key: &str) -> Option<T> {
    let raw = match cache.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("Cache read for {} failed: {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Discarding undecodable cache entry {}: {}", key, e);
            None
        }
    }
}

/// Encodes and stores a JSON value, logging instead of failing on errors.
///
/// # Arguments
/// - `cache` - Cache backend
/// - `key` - Key to write
/// - `value` - Value to encode
/// - `ttl` - Optional expiry
pub async fn set_json<T: Serialize>(
    cache: &dyn Cache,
    key: &str,
    value: &T,
    ttl: Option<Duration>,
) {
    let result = match serde_json::to_string(value) {
        Ok(raw) => cache.set(key, &raw, ttl).await,
        Err(e) => Err(CacheError::from(e)),
    };

    if let Err(e) = result {
        tracing::warn!("Cache write for {} failed: {}", key, e);
    }
}

/// Removes the given keys and prefixes, logging failures.
///
/// # Arguments
/// - `cache` - Cache backend
/// - `keys` - Exact keys to delete
/// - `prefixes` - Key prefixes to delete
pub async fn invalidate(cache: &dyn Cache, keys: &[String], prefixes: &[&str]) {
    for key in keys {
        if let Err(e) = cache.delete(key).await {
            tracing::warn!("Cache delete for {} failed: {}", key, e);
        }
    }

    for prefix in prefixes {
        if let Err(e) = cache.delete_by_prefix(prefix).await {
            tracing::warn!("Cache prefix delete for {}* failed: {}", prefix, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::cache::memory::MemoryCache;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
    }

    /// Tests that JSON helpers round a value through the cache.
    ///
    /// Expected: decoded value equals the stored one
    #[tokio::test]
    async fn stores_and_reads_json_values() {
        let cache = MemoryCache::new();
        let sample = Sample {
            name: "Ada".to_string(),
        };

        set_json(&cache, "sample", &sample, None).await;
        let loaded: Option<Sample> = get_json(&cache, "sample").await;

        assert_eq!(loaded, Some(sample));
    }

    /// Tests that an entry that is not valid JSON for the target type reads as a miss.
    ///
    /// Expected: None
    #[tokio::test]
    async fn treats_undecodable_entry_as_miss() {
        let cache = MemoryCache::new();
        cache.set("sample", "not json", None).await.unwrap();

        let loaded: Option<Sample> = get_json(&cache, "sample").await;

        assert!(loaded.is_none());
    }

    /// Tests invalidation of exact keys together with a prefix.
    ///
    /// Expected: targeted keys removed, unrelated key kept
    #[tokio::test]
    async fn invalidates_keys_and_prefixes() {
        let cache = MemoryCache::new();
        cache.set("user:1", "a", None).await.unwrap();
        cache.set("users:1:10", "b", None).await.unwrap();
        cache.set("users:2:10", "c", None).await.unwrap();
        cache.set("user:2", "d", None).await.unwrap();

        invalidate(&cache, &["user:1".to_string()], &["users:"]).await;

        assert!(cache.get("user:1").await.unwrap().is_none());
        assert!(cache.get("users:1:10").await.unwrap().is_none());
        assert!(cache.get("users:2:10").await.unwrap().is_none());
        assert_eq!(cache.get("user:2").await.unwrap(), Some("d".to_string()));
    }
}
