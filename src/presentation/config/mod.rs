mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AiProvider, AiSettings, CacheSettings, LimitsSettings, LoggingSettings,
    ProtectedTermsSettings, RateLimitSettings, ServerSettings, Settings, SummarizationSettings,
};
