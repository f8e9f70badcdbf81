use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::{
    CacheWritePolicy, DEFAULT_CACHE_TTL, DEFAULT_MAX_TEXT_LENGTH, DEFAULT_REQUESTS_PER_WINDOW, DEFAULT_WINDOW,
    SummarizationConfig,
};
use crate::domain::TermCategory;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub limits: LimitsSettings,
    pub rate_limit: RateLimitSettings,
    pub cache: CacheSettings,
    pub summarization: SummarizationSettings,
    pub ai: AiSettings,
    pub protected_terms: ProtectedTermsSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Defaults, then `appsettings.toml`, then `appsettings.{environment}.toml`,
    /// then `APP_`-prefixed variables (`APP_SERVER__PORT=8080`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("appsettings").required(false))
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.file_suffix()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("rate_limit.client_ip_headers")
                    .with_list_parse_key("ai.summarization_models")
                    .with_list_parse_key("ai.translation_models")
                    .with_list_parse_key("protected_terms.categories")
                    .with_list_parse_key("protected_terms.extra")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn summarization_config(&self) -> SummarizationConfig {
        let s = &self.summarization;
        SummarizationConfig {
            short_input_threshold: s.short_input_threshold,
            max_chunk_size: s.max_chunk_size,
            condense_threshold: s.condense_threshold,
            max_summary_tokens: s.max_summary_tokens,
            naive_fallback_sentences: s.naive_fallback_sentences,
            max_concurrent_calls: s.max_concurrent_calls,
            call_timeout: self.ai.timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8787,
            static_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsSettings {
    pub max_text_length: usize,
}

impl Default for LimitsSettings {
    fn default() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitSettings {
    pub requests_per_window: usize,
    pub window_secs: u64,
    /// Checked in order; the first present header names the client.
    pub client_ip_headers: Vec<String>,
}

impl RateLimitSettings {
    /// Never shorter than one second.
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs.max(1))
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            requests_per_window: DEFAULT_REQUESTS_PER_WINDOW,
            window_secs: DEFAULT_WINDOW.as_secs(),
            client_ip_headers: vec![
                "cf-connecting-ip".to_string(),
                "x-forwarded-for".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub enabled: bool,
    pub ttl_secs: u64,
    pub capacity: usize,
    pub write_policy: CacheWritePolicy,
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: DEFAULT_CACHE_TTL.as_secs(),
            capacity: 10_000,
            write_policy: CacheWritePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummarizationSettings {
    pub short_input_threshold: usize,
    pub max_chunk_size: usize,
    pub condense_threshold: usize,
    pub max_summary_tokens: usize,
    pub naive_fallback_sentences: usize,
    pub max_concurrent_calls: usize,
}

impl Default for SummarizationSettings {
    fn default() -> Self {
        let defaults = SummarizationConfig::default();
        Self {
            short_input_threshold: defaults.short_input_threshold,
            max_chunk_size: defaults.max_chunk_size,
            condense_threshold: defaults.condense_threshold,
            max_summary_tokens: defaults.max_summary_tokens,
            naive_fallback_sentences: defaults.naive_fallback_sentences,
            max_concurrent_calls: defaults.max_concurrent_calls,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiProvider {
    WorkersAi,
    #[serde(rename = "openai")]
    OpenAi,
    #[default]
    Mock,
}

impl AiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::WorkersAi => "workers_ai",
            AiProvider::OpenAi => "openai",
            AiProvider::Mock => "mock",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    pub provider: AiProvider,
    pub account_id: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    /// First entry is the primary model, the rest are fallbacks.
    pub summarization_models: Vec<String>,
    pub translation_models: Vec<String>,
    /// Output budget for prompted translation on chat providers.
    pub translation_max_tokens: usize,
    pub timeout_ms: u64,
    pub temperature: f32,
}

pub const WORKERS_AI_SUMMARIZATION_MODEL: &str = "@cf/meta/llama-3-8b-instruct";
pub const WORKERS_AI_TRANSLATION_MODEL: &str = "@cf/meta/m2m100-1.2b";

impl AiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Configured summarization models, else the provider's default.
    /// OpenAI-compatible endpoints have no default model.
    pub fn effective_summarization_models(&self) -> Vec<String> {
        if !self.summarization_models.is_empty() {
            return self.summarization_models.clone();
        }
        match self.provider {
            AiProvider::WorkersAi => vec![WORKERS_AI_SUMMARIZATION_MODEL.to_string()],
            AiProvider::OpenAi | AiProvider::Mock => Vec::new(),
        }
    }

    /// Configured translation models, else the provider's default. Chat
    /// providers translate with their summarization models.
    pub fn effective_translation_models(&self) -> Vec<String> {
        if !self.translation_models.is_empty() {
            return self.translation_models.clone();
        }
        match self.provider {
            AiProvider::WorkersAi => vec![WORKERS_AI_TRANSLATION_MODEL.to_string()],
            AiProvider::OpenAi => self.effective_summarization_models(),
            AiProvider::Mock => Vec::new(),
        }
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            account_id: None,
            api_key: None,
            base_url: None,
            summarization_models: Vec::new(),
            translation_models: Vec::new(),
            translation_max_tokens: 1024,
            timeout_ms: 30_000,
            temperature: 0.3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProtectedTermsSettings {
    pub categories: Vec<TermCategory>,
    pub extra: Vec<String>,
}

impl Default for ProtectedTermsSettings {
    fn default() -> Self {
        Self {
            categories: TermCategory::DEFAULTS.to_vec(),
            extra: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,edgescribe=debug,tower_http=debug".to_string(),
            enable_json: false,
        }
    }
}
