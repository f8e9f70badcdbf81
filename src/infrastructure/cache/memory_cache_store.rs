use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use parking_lot::Mutex;

use crate::application::ports::{CacheStore, CacheStoreError};

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// Process-local LRU store with per-entry expiry. Expired entries are dropped
/// lazily on read.
pub struct MemoryCacheStore {
    inner: Mutex<LruCache<String, CacheEntry>>,
}

impl MemoryCacheStore {
    /// A capacity of zero falls back to 1024 entries.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_CAPACITY);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY.get())
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheStoreError> {
        let mut cache = self.inner.lock();
        let expired = match cache.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                return Ok(Some(entry.value.clone()));
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            cache.pop(key);
        }
        Ok(None)
    }

    async fn put(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheStoreError> {
        let expires_at = Instant::now()
            .checked_add(ttl)
            .ok_or_else(|| CacheStoreError::WriteFailed(format!("ttl out of range: {:?}", ttl)))?;
        self.inner
            .lock()
            .put(key.to_string(), CacheEntry { value, expires_at });
        Ok(())
    }
}
