use crate::presentation::config::LoggingSettings;

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub default_directives: String,
    pub json_format: bool,
}

impl From<&LoggingSettings> for TracingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            default_directives: settings.level.clone(),
            json_format: settings.enable_json,
        }
    }
}
