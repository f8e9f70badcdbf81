pub mod cache;
pub mod llm;
pub mod observability;
pub mod rate_limit;
pub mod text_processing;
