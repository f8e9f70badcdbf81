use std::fmt;

/// The four failure kinds a request can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    RateLimit,
    AiService,
    Internal,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Validation => "validation",
            FailureKind::RateLimit => "rate_limit",
            FailureKind::AiService => "ai_service",
            FailureKind::Internal => "internal",
        }
    }
}

/// Where a request is in the summarize-and-translate flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Received,
    Validated,
    RateChecked,
    CacheChecked,
    Normalized,
    Summarized,
    Translated,
    Cached,
    Responded,
    Failed(FailureKind),
}

impl PipelineStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Responded | PipelineStage::Failed(_))
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Received => f.write_str("received"),
            PipelineStage::Validated => f.write_str("validated"),
            PipelineStage::RateChecked => f.write_str("rate_checked"),
            PipelineStage::CacheChecked => f.write_str("cache_checked"),
            PipelineStage::Normalized => f.write_str("normalized"),
            PipelineStage::Summarized => f.write_str("summarized"),
            PipelineStage::Translated => f.write_str("translated"),
            PipelineStage::Cached => f.write_str("cached"),
            PipelineStage::Responded => f.write_str("responded"),
            PipelineStage::Failed(kind) => write!(f, "failed({})", kind.as_str()),
        }
    }
}

/// Whether a response came from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
        }
    }
}
