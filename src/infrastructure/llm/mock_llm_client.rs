use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError, TranslationClient};
use crate::application::services::naive_summary;
use crate::domain::LanguageCode;

const SECTION_MARKER: &str = "---";

/// Offline stand-in: "summarizes" by returning the first two sentences of the
/// text found between the prompt's `---` markers.
pub struct MockLlmClient;

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str, _max_tokens: usize) -> Result<String, LlmClientError> {
        let section = prompt
            .split_once(SECTION_MARKER)
            .and_then(|(_, rest)| rest.rsplit_once(SECTION_MARKER))
            .map(|(section, _)| section)
            .unwrap_or(prompt);

        Ok(naive_summary(section, 2))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Offline stand-in that tags the text with the target language.
pub struct MockTranslationClient;

#[async_trait]
impl TranslationClient for MockTranslationClient {
    async fn translate(
        &self,
        text: &str,
        _source_lang: LanguageCode,
        target_lang: LanguageCode,
    ) -> Result<String, LlmClientError> {
        Ok(format!("[{}] {}", target_lang, text))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
