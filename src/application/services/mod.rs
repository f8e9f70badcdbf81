mod input_validator;
mod protected_term_guard;
mod rate_limiter;
mod response_cache;
mod summarization_service;
mod summary_pipeline;
mod summary_postprocess;
mod translation_service;

pub use input_validator::{
    DEFAULT_MAX_TEXT_LENGTH, InputValidator, RawSummaryInput, ValidationError,
};
pub use protected_term_guard::{
    ProtectedTermError, ProtectedTermGuard, ProtectedTermMap, ProtectedText, placeholder,
};
pub use rate_limiter::{
    DEFAULT_REQUESTS_PER_WINDOW, DEFAULT_WINDOW, RateLimitError, RateLimiter,
};
pub use response_cache::{CacheWritePolicy, DEFAULT_CACHE_TTL, ResponseCache};
pub use summarization_service::{SummarizationConfig, SummarizationError, SummarizationService};
pub use summary_pipeline::{AiServiceError, PipelineError, PipelineOutcome, SummaryPipeline};
pub use summary_postprocess::{
    clean_generated_summary, deduplicate_sentences, naive_summary, strip_preamble,
};
pub use translation_service::{TranslationError, TranslationService};
