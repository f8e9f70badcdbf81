use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio_util::task::TaskTracker;

use crate::application::ports::CacheStore;
use crate::domain::{CacheKey, SummaryResult};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// When a finished result is written to the store relative to the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheWritePolicy {
    /// Await the write before responding.
    Synchronous,
    /// Spawn the write and respond immediately.
    #[default]
    WriteBehind,
}

impl CacheWritePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheWritePolicy::Synchronous => "synchronous",
            CacheWritePolicy::WriteBehind => "write_behind",
        }
    }
}

/// Read-through cache of [`SummaryResult`]s serialized as JSON.
///
/// Store failures are logged and never reach the caller: a failed read is a
/// miss, a failed write is dropped.
pub struct ResponseCache {
    store: Option<Arc<dyn CacheStore>>,
    ttl: Duration,
    policy: CacheWritePolicy,
    pending_writes: TaskTracker,
}

impl ResponseCache {
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration, policy: CacheWritePolicy) -> Self {
        Self {
            store: Some(store),
            ttl,
            policy,
            pending_writes: TaskTracker::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            store: None,
            ttl: DEFAULT_CACHE_TTL,
            policy: CacheWritePolicy::default(),
            pending_writes: TaskTracker::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn policy(&self) -> CacheWritePolicy {
        self.policy
    }

    pub async fn get(&self, key: &CacheKey) -> Option<SummaryResult> {
        let store = self.store.as_ref()?;

        let raw = match store.get(key.as_str()).await {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Cache read failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Cached entry is not a valid result");
                None
            }
        }
    }

    pub async fn put(&self, key: CacheKey, result: &SummaryResult) {
        let Some(store) = self.store.as_ref() else {
            return;
        };

        let value = match serde_json::to_string(result) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(error = %e, key = %key, "Failed to serialize result for cache");
                return;
            }
        };

        match self.policy {
            CacheWritePolicy::Synchronous => write_entry(store.as_ref(), key, value, self.ttl).await,
            CacheWritePolicy::WriteBehind => {
                let store = Arc::clone(store);
                let ttl = self.ttl;
                self.pending_writes
                    .spawn(async move { write_entry(store.as_ref(), key, value, ttl).await });
            }
        }
    }

    /// Waits for every write-behind task spawned so far. Called once on shutdown.
    pub async fn flush(&self) {
        self.pending_writes.close();
        tracing::info!(
            pending = self.pending_writes.len(),
            "Waiting for pending cache writes"
        );
        self.pending_writes.wait().await;
    }

    /// Like [`flush`](Self::flush) but leaves the cache usable afterwards.
    pub async fn settle(&self) {
        self.pending_writes.close();
        self.pending_writes.wait().await;
        self.pending_writes.reopen();
    }
}

async fn write_entry(store: &dyn CacheStore, key: CacheKey, value: String, ttl: Duration) {
    match store.put(key.as_str(), value, ttl).await {
        Ok(()) => tracing::debug!(key = %key, ttl_secs = ttl.as_secs(), "Cached result"),
        Err(e) => tracing::warn!(error = %e, key = %key, "Cache write failed"),
    }
}
