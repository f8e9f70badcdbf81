use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::application::ports::{LlmClient, LlmClientError, TranslationClient};
use crate::application::prompts::PromptTemplates;
use crate::domain::LanguageCode;

const START_TAG: &str = "<final_translation>";
const END_TAG: &str = "</final_translation>";
const DEFAULT_MAX_TOKENS: usize = 1024;

static STRAY_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[A-Za-z_][A-Za-z0-9_]*>").expect("stray tag regex"));

/// Translation through a general-purpose text-generation model.
pub struct LlmTranslationClient {
    llm_client: Arc<dyn LlmClient>,
    prompts: PromptTemplates,
    max_tokens: usize,
    name: String,
}

impl LlmTranslationClient {
    pub fn new(llm_client: Arc<dyn LlmClient>, prompts: PromptTemplates) -> Self {
        let name = format!("llm:{}", llm_client.name());
        Self {
            llm_client,
            prompts,
            max_tokens: DEFAULT_MAX_TOKENS,
            name,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn extract_translation(&self, response: &str) -> String {
        let body = match (response.find(START_TAG), response.find(END_TAG)) {
            (Some(start), Some(end)) if start + START_TAG.len() <= end => {
                &response[start + START_TAG.len()..end]
            }
            (Some(start), None) => &response[start + START_TAG.len()..],
            _ => response,
        };

        STRAY_TAG_RE.replace_all(body, "").trim().to_string()
    }
}

#[async_trait]
impl TranslationClient for LlmTranslationClient {
    async fn translate(
        &self,
        text: &str,
        source_lang: LanguageCode,
        target_lang: LanguageCode,
    ) -> Result<String, LlmClientError> {
        let prompt = self.prompts.translate(text, source_lang, target_lang);
        let response = self.llm_client.complete(&prompt, self.max_tokens).await?;

        let translated = self.extract_translation(&response);
        if translated.is_empty() {
            return Err(LlmClientError::EmptyResponse);
        }
        Ok(translated)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
