use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{RateLimitStore, WindowVerdict};

pub const DEFAULT_REQUESTS_PER_WINDOW: usize = 60;
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Rate limit exceeded. Please try again later.")]
pub struct RateLimitError {
    pub retry_after: Duration,
}

/// Per-client sliding-window admission control.
///
/// Counts are recomputed from stored timestamps on every call rather than
/// decayed. Store failures admit the request.
pub struct RateLimiter {
    store: Arc<dyn RateLimitStore>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(store: Arc<dyn RateLimitStore>, limit: usize, window: Duration) -> Self {
        Self {
            store,
            limit,
            window,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub async fn check(&self, client_id: &str) -> Result<(), RateLimitError> {
        self.check_at(client_id, chrono::Utc::now().timestamp_millis())
            .await
    }

    pub async fn check_at(&self, client_id: &str, now_ms: i64) -> Result<(), RateLimitError> {
        match self
            .store
            .record(client_id, now_ms, self.window, self.limit)
            .await
        {
            Ok(WindowVerdict::Admitted { in_window }) => {
                tracing::trace!(client_id, in_window, "Request admitted");
                Ok(())
            }
            Ok(WindowVerdict::Rejected { in_window }) => {
                tracing::warn!(client_id, in_window, limit = self.limit, "Rate limit exceeded");
                Err(RateLimitError {
                    retry_after: self.window,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, client_id, "Rate limit store failed, admitting request");
                Ok(())
            }
        }
    }
}
