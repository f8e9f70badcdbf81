use std::sync::Arc;
use std::time::Duration;

use super::protected_term_guard::ProtectedTermGuard;
use crate::application::ports::{LlmClientError, TranslationClient};
use crate::domain::LanguageCode;

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation {source_lang}->{target_lang} failed: {cause}")]
    Backend {
        source_lang: LanguageCode,
        target_lang: LanguageCode,
        #[source]
        cause: LlmClientError,
    },
    #[error("translation {source_lang}->{target_lang} produced no text")]
    EmptyOutput {
        source_lang: LanguageCode,
        target_lang: LanguageCode,
    },
}

/// Translation wrapped in protected-term substitution.
pub struct TranslationService {
    client: Arc<dyn TranslationClient>,
    guard: Arc<ProtectedTermGuard>,
    call_timeout: Duration,
}

impl TranslationService {
    pub fn new(
        client: Arc<dyn TranslationClient>,
        guard: Arc<ProtectedTermGuard>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            client,
            guard,
            call_timeout,
        }
    }

    pub fn guard(&self) -> &ProtectedTermGuard {
        &self.guard
    }

    /// Returns `text` untouched when both languages are the same.
    pub async fn translate(
        &self,
        text: &str,
        source_lang: LanguageCode,
        target_lang: LanguageCode,
    ) -> Result<String, TranslationError> {
        if source_lang == target_lang {
            return Ok(text.to_string());
        }

        let protected = self.guard.protect(text);
        tracing::debug!(
            source = %source_lang,
            target = %target_lang,
            protected_terms = protected.terms.len(),
            "Translating"
        );

        let translated = self
            .call_backend(&protected.text, source_lang, target_lang)
            .await?;

        Ok(self.guard.restore(&translated, &protected.terms))
    }

    /// Two hops through English when neither side is English.
    pub async fn translate_via_english(
        &self,
        text: &str,
        source_lang: LanguageCode,
        target_lang: LanguageCode,
    ) -> Result<String, TranslationError> {
        if source_lang.is_english() || target_lang.is_english() || source_lang == target_lang {
            return self.translate(text, source_lang, target_lang).await;
        }

        let english = self
            .translate(text, source_lang, LanguageCode::ENGLISH)
            .await?;
        self.translate(&english, LanguageCode::ENGLISH, target_lang)
            .await
    }

    async fn call_backend(
        &self,
        text: &str,
        source_lang: LanguageCode,
        target_lang: LanguageCode,
    ) -> Result<String, TranslationError> {
        let backend_error = |cause| TranslationError::Backend {
            source_lang,
            target_lang,
            cause,
        };

        let translated = tokio::time::timeout(
            self.call_timeout,
            self.client
                .translate(text, source_lang.effective(), target_lang.effective()),
        )
        .await
        .map_err(|_| backend_error(LlmClientError::Timeout(self.call_timeout.as_millis() as u64)))?
        .map_err(backend_error)?;

        let translated = translated.trim();
        if translated.is_empty() {
            return Err(TranslationError::EmptyOutput {
                source_lang,
                target_lang,
            });
        }

        Ok(translated.to_string())
    }
}
