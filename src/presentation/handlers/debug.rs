use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::domain::SUPPORTED_LANGUAGES;
use crate::presentation::config::AiProvider;
use crate::presentation::state::AppState;

/// Effective runtime configuration. Credentials are never included.
#[derive(Serialize)]
pub struct DebugResponse {
    pub cache_bound: bool,
    pub ai_provider: &'static str,
    pub config: DebugConfig,
    pub capabilities: DebugCapabilities,
}

#[derive(Serialize)]
pub struct DebugConfig {
    pub max_text_length: usize,
    pub cache_ttl: u64,
    pub rate_limit_per_ip: usize,
    pub rate_limit_window_secs: u64,
    pub ai_timeout_ms: u64,
    pub protected_words_count: usize,
    pub supported_languages_count: usize,
    pub cache_write_policy: &'static str,
}

#[derive(Serialize)]
pub struct DebugCapabilities {
    pub direct_translation: bool,
    pub protected_words: bool,
    pub language_fallbacks: bool,
    pub model_fallbacks: bool,
}

pub async fn debug_handler(State(state): State<AppState>) -> Json<DebugResponse> {
    let pipeline = &state.pipeline;
    let settings = &state.settings;
    let ai = &settings.ai;

    Json(DebugResponse {
        cache_bound: pipeline.cache().is_enabled(),
        ai_provider: ai.provider.as_str(),
        config: DebugConfig {
            max_text_length: pipeline.validator().max_text_length(),
            cache_ttl: pipeline.cache().ttl().as_secs(),
            rate_limit_per_ip: pipeline.rate_limiter().limit(),
            rate_limit_window_secs: settings.rate_limit.window_secs,
            ai_timeout_ms: ai.timeout_ms,
            protected_words_count: pipeline.translator().guard().vocabulary_size(),
            supported_languages_count: SUPPORTED_LANGUAGES.len(),
            cache_write_policy: pipeline.cache().policy().as_str(),
        },
        capabilities: DebugCapabilities {
            direct_translation: false,
            protected_words: true,
            language_fallbacks: true,
            model_fallbacks: ai.provider != AiProvider::Mock
                && (ai.effective_summarization_models().len() > 1
                    || ai.effective_translation_models().len() > 1),
        },
    })
}
