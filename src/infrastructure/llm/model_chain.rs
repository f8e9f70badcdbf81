use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError, TranslationClient};
use crate::domain::LanguageCode;

/// Primary model followed by fallbacks, tried in order until one returns
/// non-empty text. When all fail the last error is returned.
pub struct ModelChain<C: ?Sized> {
    models: Vec<Arc<C>>,
    name: String,
}

impl<C: ?Sized> ModelChain<C> {
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl ModelChain<dyn LlmClient> {
    pub fn of_llm(models: Vec<Arc<dyn LlmClient>>) -> Self {
        let name = chain_name(models.iter().map(|m| m.name()));
        Self { models, name }
    }
}

impl ModelChain<dyn TranslationClient> {
    pub fn of_translation(models: Vec<Arc<dyn TranslationClient>>) -> Self {
        let name = chain_name(models.iter().map(|m| m.name()));
        Self { models, name }
    }
}

fn chain_name<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(" -> ")
}

fn accept(model: &str, outcome: Result<String, LlmClientError>) -> Result<String, LlmClientError> {
    match outcome {
        Ok(text) if !text.trim().is_empty() => Ok(text),
        Ok(_) => {
            tracing::warn!(model, "Model returned empty output");
            Err(LlmClientError::EmptyResponse)
        }
        Err(e) => {
            tracing::warn!(model, error = %e, "Model call failed");
            Err(e)
        }
    }
}

#[async_trait]
impl LlmClient for ModelChain<dyn LlmClient> {
    async fn complete(&self, prompt: &str, max_tokens: usize) -> Result<String, LlmClientError> {
        let mut last_error = LlmClientError::ApiRequestFailed("no models configured".to_string());
        for model in &self.models {
            match accept(model.name(), model.complete(prompt, max_tokens).await) {
                Ok(text) => return Ok(text),
                Err(e) => last_error = e,
            }
        }
        Err(last_error)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl TranslationClient for ModelChain<dyn TranslationClient> {
    async fn translate(
        &self,
        text: &str,
        source_lang: LanguageCode,
        target_lang: LanguageCode,
    ) -> Result<String, LlmClientError> {
        let mut last_error = LlmClientError::ApiRequestFailed("no models configured".to_string());
        for model in &self.models {
            let outcome = model.translate(text, source_lang, target_lang).await;
            match accept(model.name(), outcome) {
                Ok(translated) => return Ok(translated),
                Err(e) => last_error = e,
            }
        }
        Err(last_error)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
