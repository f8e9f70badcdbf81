use async_trait::async_trait;

/// A hosted text-generation model.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str, max_tokens: usize) -> Result<String, LlmClientError>;

    /// Short identifier used in logs and the debug endpoint.
    fn name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("empty response")]
    EmptyResponse,
    #[error("timed out after {0} ms")]
    Timeout(u64),
}
