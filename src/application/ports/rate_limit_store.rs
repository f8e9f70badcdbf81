use std::time::Duration;

use async_trait::async_trait;

/// Outcome of one admission attempt against a client's trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowVerdict {
    Admitted { in_window: usize },
    Rejected { in_window: usize },
}

/// Storage for per-client request timestamps (unix milliseconds).
///
/// `record` must prune timestamps at or before `now_ms - window`, count the
/// rest, and append `now_ms` only when the count is below `limit`, as one
/// atomic step per client.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    async fn record(
        &self,
        client_id: &str,
        now_ms: i64,
        window: Duration,
        limit: usize,
    ) -> Result<WindowVerdict, RateLimitStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RateLimitStoreError {
    #[error("rate limit store unavailable: {0}")]
    Unavailable(String),
}
