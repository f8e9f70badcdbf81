mod cache_store;
mod llm_client;
mod rate_limit_store;
mod text_splitter;
mod translation_client;

pub use cache_store::{CacheStore, CacheStoreError};
pub use llm_client::{LlmClient, LlmClientError};
pub use rate_limit_store::{RateLimitStore, RateLimitStoreError, WindowVerdict};
pub use text_splitter::TextSplitter;
pub use translation_client::TranslationClient;
