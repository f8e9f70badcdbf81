use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::application::ports::{RateLimitStore, RateLimitStoreError, WindowVerdict};

/// Single-process window store. State is lost on restart.
#[derive(Default)]
pub struct InMemoryRateLimitStore {
    windows: Mutex<HashMap<String, Vec<i64>>>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracked_clients(&self) -> usize {
        self.windows.lock().len()
    }

    /// Drops clients with no request inside the window. Returns how many.
    pub fn evict_idle(&self, now_ms: i64, window: Duration) -> usize {
        let window_start = now_ms.saturating_sub(window.as_millis() as i64);
        let mut windows = self.windows.lock();
        let before = windows.len();
        windows.retain(|_, timestamps| timestamps.iter().any(|&at| at > window_start));
        before - windows.len()
    }
}

#[async_trait]
impl RateLimitStore for InMemoryRateLimitStore {
    async fn record(
        &self,
        client_id: &str,
        now_ms: i64,
        window: Duration,
        limit: usize,
    ) -> Result<WindowVerdict, RateLimitStoreError> {
        let window_start = now_ms.saturating_sub(window.as_millis() as i64);
        let mut windows = self.windows.lock();
        let timestamps = windows.entry(client_id.to_string()).or_default();

        timestamps.retain(|&at| at > window_start);

        let in_window = timestamps.len();
        if in_window >= limit {
            return Ok(WindowVerdict::Rejected { in_window });
        }

        timestamps.push(now_ms);
        Ok(WindowVerdict::Admitted {
            in_window: in_window + 1,
        })
    }
}
