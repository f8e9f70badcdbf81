use std::sync::Arc;

use super::input_validator::{InputValidator, RawSummaryInput, ValidationError};
use super::rate_limiter::{RateLimitError, RateLimiter};
use super::response_cache::ResponseCache;
use super::summarization_service::{SummarizationError, SummarizationService};
use super::translation_service::{TranslationError, TranslationService};
use crate::domain::{
    CacheKey, CacheStatus, FailureKind, LanguageCode, PipelineStage, SummaryResult,
};

#[derive(Debug, thiserror::Error)]
pub enum AiServiceError {
    #[error("Translation to English failed.")]
    Normalization(#[source] TranslationError),
    #[error("The AI summarization service failed.")]
    Summarization(#[source] SummarizationError),
    #[error("Translation failed to produce a valid response.")]
    Translation(#[source] TranslationError),
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),
    #[error(transparent)]
    AiService(#[from] AiServiceError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl PipelineError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PipelineError::Validation(_) => FailureKind::Validation,
            PipelineError::RateLimit(_) => FailureKind::RateLimit,
            PipelineError::AiService(_) => FailureKind::AiService,
            PipelineError::Internal(_) => FailureKind::Internal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub result: SummaryResult,
    pub cache_status: CacheStatus,
}

/// validate -> rate-limit -> cache lookup -> normalize to English ->
/// summarize -> translate to target -> cache store.
///
/// Every failure is terminal for the request; nothing is retried across
/// stages. A cache hit skips straight to the response.
pub struct SummaryPipeline {
    validator: InputValidator,
    rate_limiter: Arc<RateLimiter>,
    cache: Arc<ResponseCache>,
    summarizer: Arc<SummarizationService>,
    translator: Arc<TranslationService>,
}

impl SummaryPipeline {
    pub fn new(
        validator: InputValidator,
        rate_limiter: Arc<RateLimiter>,
        cache: Arc<ResponseCache>,
        summarizer: Arc<SummarizationService>,
        translator: Arc<TranslationService>,
    ) -> Self {
        Self {
            validator,
            rate_limiter,
            cache,
            summarizer,
            translator,
        }
    }

    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn translator(&self) -> &TranslationService {
        &self.translator
    }

    #[tracing::instrument(skip(self, input), fields(stage = tracing::field::Empty))]
    pub async fn run(
        &self,
        client_id: &str,
        input: RawSummaryInput<'_>,
    ) -> Result<PipelineOutcome, PipelineError> {
        let mut stage = PipelineStage::Received;

        match self.advance(&mut stage, client_id, input).await {
            Ok(outcome) => {
                transition(&mut stage, PipelineStage::Responded);
                Ok(outcome)
            }
            Err(e) => {
                let failed_at = stage;
                transition(&mut stage, PipelineStage::Failed(e.kind()));
                match e.kind() {
                    FailureKind::Validation | FailureKind::RateLimit => {
                        tracing::warn!(error = %e, %failed_at, "Request rejected")
                    }
                    FailureKind::AiService | FailureKind::Internal => {
                        tracing::error!(error = ?e, %failed_at, "Request failed")
                    }
                }
                Err(e)
            }
        }
    }

    async fn advance(
        &self,
        stage: &mut PipelineStage,
        client_id: &str,
        input: RawSummaryInput<'_>,
    ) -> Result<PipelineOutcome, PipelineError> {
        let request = self.validator.validate(input)?;
        transition(stage, PipelineStage::Validated);

        self.rate_limiter.check(client_id).await?;
        transition(stage, PipelineStage::RateChecked);

        let cache_key = CacheKey::build(request.source_lang, request.target_lang, &request.text);
        let cached = self.cache.get(&cache_key).await;
        transition(stage, PipelineStage::CacheChecked);
        if let Some(result) = cached {
            tracing::info!(key = %cache_key, "Cache hit");
            return Ok(PipelineOutcome {
                result,
                cache_status: CacheStatus::Hit,
            });
        }

        let english = if request.source_lang.is_english() {
            request.text.clone()
        } else {
            self.translator
                .translate(&request.text, request.source_lang, LanguageCode::ENGLISH)
                .await
                .map_err(AiServiceError::Normalization)?
        };
        transition(stage, PipelineStage::Normalized);

        let summary = self
            .summarizer
            .summarize(&english)
            .await
            .map_err(AiServiceError::Summarization)?;
        transition(stage, PipelineStage::Summarized);

        let translated = if request.target_lang.is_english() {
            summary.clone()
        } else {
            self.translator
                .translate(&summary, LanguageCode::ENGLISH, request.target_lang)
                .await
                .map_err(AiServiceError::Translation)?
        };
        transition(stage, PipelineStage::Translated);

        let result = SummaryResult::new(summary, translated, request.target_lang);
        self.cache.put(cache_key, &result).await;
        transition(stage, PipelineStage::Cached);

        Ok(PipelineOutcome {
            result,
            cache_status: CacheStatus::Miss,
        })
    }
}

fn transition(stage: &mut PipelineStage, next: PipelineStage) {
    tracing::debug!(from = %stage, to = %next, "Pipeline transition");
    tracing::Span::current().record("stage", tracing::field::display(next));
    *stage = next;
}
