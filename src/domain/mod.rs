mod cache_key;
mod chunk;
mod language;
mod pipeline_stage;
mod protected_vocabulary;
mod sentence;
mod summary_request;
mod summary_result;

pub use cache_key::{CacheKey, text_hash};
pub use chunk::Chunk;
pub use language::{LANGUAGE_FALLBACKS, LanguageCode, SUPPORTED_LANGUAGES};
pub use pipeline_stage::{CacheStatus, FailureKind, PipelineStage};
pub use protected_vocabulary::{TermCategory, build_vocabulary};
pub use sentence::split_sentences;
pub use summary_request::SummaryRequest;
pub use summary_result::SummaryResult;
