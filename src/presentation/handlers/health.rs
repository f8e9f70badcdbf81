use axum::Json;
use axum::extract::State;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::{LANGUAGE_FALLBACKS, SUPPORTED_LANGUAGES};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub features: HealthFeatures,
}

#[derive(Serialize)]
pub struct HealthFeatures {
    pub protected_words: usize,
    pub supported_languages: usize,
    pub fallback_languages: usize,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: env!("CARGO_PKG_VERSION"),
        features: HealthFeatures {
            protected_words: state.pipeline.translator().guard().vocabulary_size(),
            supported_languages: SUPPORTED_LANGUAGES.len(),
            fallback_languages: LANGUAGE_FALLBACKS.len(),
        },
    })
}
