use std::time::Duration;

use async_trait::async_trait;

/// Key-value store with per-entry expiry. Expired entries are the store's
/// concern; callers never delete.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheStoreError>;

    async fn put(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CacheStoreError {
    #[error("cache read failed: {0}")]
    ReadFailed(String),
    #[error("cache write failed: {0}")]
    WriteFailed(String),
}
