use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError, TranslationClient};
use crate::domain::LanguageCode;

pub const WORKERS_AI_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Cloudflare Workers AI `ai/run` endpoint for a single model.
pub struct WorkersAiClient {
    client: Client,
    base_url: String,
    account_id: String,
    api_token: String,
    model: String,
}

#[derive(Serialize)]
struct TextGenerationRequest<'a> {
    prompt: &'a str,
    max_tokens: usize,
}

#[derive(Serialize)]
struct TranslationRequest<'a> {
    text: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
}

#[derive(Deserialize)]
struct RunResponse<T> {
    #[serde(default)]
    success: bool,
    result: Option<T>,
    #[serde(default)]
    errors: Vec<ApiMessage>,
}

#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

#[derive(Deserialize)]
struct TextGenerationResult {
    response: Option<String>,
}

#[derive(Deserialize)]
struct TranslationResult {
    translated_text: Option<String>,
}

impl WorkersAiClient {
    pub fn new(
        client: Client,
        base_url: String,
        account_id: String,
        api_token: String,
        model: String,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            account_id,
            api_token,
            model,
        }
    }

    async fn run<B, T>(&self, body: &B) -> Result<T, LlmClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let url = format!(
            "{}/accounts/{}/ai/run/{}",
            self.base_url, self.account_id, self.model
        );

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let parsed: RunResponse<T> = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        if !parsed.success {
            let messages = parsed
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(LlmClientError::ApiRequestFailed(messages));
        }

        parsed
            .result
            .ok_or_else(|| LlmClientError::InvalidResponse("missing result".to_string()))
    }
}

#[async_trait]
impl LlmClient for WorkersAiClient {
    async fn complete(&self, prompt: &str, max_tokens: usize) -> Result<String, LlmClientError> {
        let result: TextGenerationResult = self
            .run(&TextGenerationRequest { prompt, max_tokens })
            .await?;

        result
            .response
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(LlmClientError::EmptyResponse)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TranslationClient for WorkersAiClient {
    async fn translate(
        &self,
        text: &str,
        source_lang: LanguageCode,
        target_lang: LanguageCode,
    ) -> Result<String, LlmClientError> {
        let result: TranslationResult = self
            .run(&TranslationRequest {
                text,
                source_lang: source_lang.as_str(),
                target_lang: target_lang.as_str(),
            })
            .await?;

        result
            .translated_text
            .filter(|text| !text.trim().is_empty())
            .ok_or(LlmClientError::EmptyResponse)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
