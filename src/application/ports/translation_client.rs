use async_trait::async_trait;

use super::LlmClientError;
use crate::domain::LanguageCode;

/// A hosted machine-translation capability.
#[async_trait]
pub trait TranslationClient: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_lang: LanguageCode,
        target_lang: LanguageCode,
    ) -> Result<String, LlmClientError>;

    fn name(&self) -> &str;
}
