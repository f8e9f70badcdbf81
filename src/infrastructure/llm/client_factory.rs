use std::sync::Arc;

use reqwest::Client;

use super::{
    LlmTranslationClient, MockLlmClient, MockTranslationClient, ModelChain, OPENAI_BASE_URL,
    OpenAiClient, WORKERS_AI_BASE_URL, WorkersAiClient,
};
use crate::application::ports::{LlmClient, TranslationClient};
use crate::application::prompts::PromptTemplates;
use crate::presentation::config::{AiProvider, AiSettings};

#[derive(Debug, thiserror::Error)]
pub enum ClientFactoryError {
    #[error("missing setting: {0} is required for the {1} provider")]
    MissingSetting(&'static str, &'static str),
    #[error("no {0} models configured")]
    NoModels(&'static str),
    #[error("http client initialization failed: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Summarization and translation backends for one provider.
pub struct AiClients {
    pub llm: Arc<dyn LlmClient>,
    pub translation: Arc<dyn TranslationClient>,
}

pub struct ClientFactory;

impl ClientFactory {
    pub fn create(
        settings: &AiSettings,
        prompts: &PromptTemplates,
    ) -> Result<AiClients, ClientFactoryError> {
        let provider = settings.provider.as_str();

        match settings.provider {
            AiProvider::Mock => {
                tracing::info!("Using mock AI clients");
                Ok(AiClients {
                    llm: Arc::new(MockLlmClient),
                    translation: Arc::new(MockTranslationClient),
                })
            }
            AiProvider::WorkersAi => {
                let account_id = required(&settings.account_id, "ai.account_id", provider)?;
                let api_token = required(&settings.api_key, "ai.api_key", provider)?;
                let base_url = settings
                    .base_url
                    .clone()
                    .unwrap_or_else(|| WORKERS_AI_BASE_URL.to_string());
                let http = http_client(settings)?;

                let workers = |model: &String| {
                    Arc::new(WorkersAiClient::new(
                        http.clone(),
                        base_url.clone(),
                        account_id.clone(),
                        api_token.clone(),
                        model.clone(),
                    ))
                };

                let summarization_models = settings.effective_summarization_models();
                let translation_models = settings.effective_translation_models();
                let llm: Vec<Arc<dyn LlmClient>> = non_empty(&summarization_models, "summarization")?
                    .iter()
                    .map(|model| workers(model) as Arc<dyn LlmClient>)
                    .collect();
                let translation: Vec<Arc<dyn TranslationClient>> =
                    non_empty(&translation_models, "translation")?
                        .iter()
                        .map(|model| workers(model) as Arc<dyn TranslationClient>)
                        .collect();

                tracing::info!(
                    summarization = ?summarization_models,
                    translation = ?translation_models,
                    "Using Workers AI models"
                );
                Ok(AiClients {
                    llm: Arc::new(ModelChain::of_llm(llm)),
                    translation: Arc::new(ModelChain::of_translation(translation)),
                })
            }
            AiProvider::OpenAi => {
                let api_key = required(&settings.api_key, "ai.api_key", provider)?;
                let base_url = settings
                    .base_url
                    .clone()
                    .unwrap_or_else(|| OPENAI_BASE_URL.to_string());
                let http = http_client(settings)?;

                let chat = |models: &[String]| -> Arc<dyn LlmClient> {
                    let clients = models
                        .iter()
                        .map(|model| {
                            Arc::new(OpenAiClient::new(
                                http.clone(),
                                base_url.clone(),
                                api_key.clone(),
                                model.clone(),
                                settings.temperature,
                            )) as Arc<dyn LlmClient>
                        })
                        .collect();
                    Arc::new(ModelChain::of_llm(clients))
                };

                let summarization_models = settings.effective_summarization_models();
                non_empty(&summarization_models, "summarization")?;
                let translation_models = settings.effective_translation_models();

                tracing::info!(
                    summarization = ?summarization_models,
                    translation = ?translation_models,
                    "Using OpenAI-compatible chat models"
                );
                Ok(AiClients {
                    llm: chat(&summarization_models),
                    translation: Arc::new(
                        LlmTranslationClient::new(chat(&translation_models), prompts.clone())
                            .with_max_tokens(settings.translation_max_tokens),
                    ),
                })
            }
        }
    }
}

fn http_client(settings: &AiSettings) -> Result<Client, ClientFactoryError> {
    Ok(Client::builder().timeout(settings.timeout()).build()?)
}

fn required(
    value: &Option<String>,
    key: &'static str,
    provider: &'static str,
) -> Result<String, ClientFactoryError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(String::from)
        .ok_or(ClientFactoryError::MissingSetting(key, provider))
}

fn non_empty<'a>(
    models: &'a [String],
    purpose: &'static str,
) -> Result<&'a [String], ClientFactoryError> {
    if models.is_empty() {
        return Err(ClientFactoryError::NoModels(purpose));
    }
    Ok(models)
}
