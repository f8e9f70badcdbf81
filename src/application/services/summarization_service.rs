use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};

use super::summary_postprocess::{clean_generated_summary, deduplicate_sentences, naive_summary};
use crate::application::ports::{LlmClient, LlmClientError, TextSplitter};
use crate::application::prompts::PromptTemplates;
use crate::domain::Chunk;

#[derive(Debug, Clone)]
pub struct SummarizationConfig {
    /// Inputs shorter than this (in chars) are returned unchanged.
    pub short_input_threshold: usize,
    pub max_chunk_size: usize,
    /// Joined chunk summaries longer than this get one more condensing pass.
    pub condense_threshold: usize,
    pub max_summary_tokens: usize,
    pub naive_fallback_sentences: usize,
    pub max_concurrent_calls: usize,
    pub call_timeout: Duration,
}

impl Default for SummarizationConfig {
    fn default() -> Self {
        Self {
            short_input_threshold: 200,
            max_chunk_size: 1500,
            condense_threshold: 1200,
            max_summary_tokens: 350,
            naive_fallback_sentences: 3,
            max_concurrent_calls: 4,
            call_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("summarization produced no text")]
    EmptySummary,
}

/// Chunk-and-recombine summarization over an [`LlmClient`].
///
/// A failed chunk is dropped from the join. When every chunk fails the
/// leading sentences of the input stand in for the summary.
pub struct SummarizationService {
    llm_client: Arc<dyn LlmClient>,
    text_splitter: Arc<dyn TextSplitter>,
    prompts: PromptTemplates,
    config: SummarizationConfig,
}

impl SummarizationService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        text_splitter: Arc<dyn TextSplitter>,
        prompts: PromptTemplates,
        config: SummarizationConfig,
    ) -> Self {
        Self {
            llm_client,
            text_splitter,
            prompts,
            config,
        }
    }

    pub fn config(&self) -> &SummarizationConfig {
        &self.config
    }

    pub async fn summarize(&self, text: &str) -> Result<String, SummarizationError> {
        if text.chars().count() < self.config.short_input_threshold {
            tracing::debug!(
                threshold = self.config.short_input_threshold,
                "Input below summarization threshold, passing through"
            );
            return Ok(text.to_string());
        }

        let chunks = self.text_splitter.split(text, self.config.max_chunk_size);
        if chunks.is_empty() {
            return Err(SummarizationError::EmptySummary);
        }
        let chunk_count = chunks.len();

        let mut summaries: Vec<String> = stream::iter(chunks)
            .map(|chunk| self.summarize_chunk(chunk))
            .buffered(self.config.max_concurrent_calls.max(1))
            .filter_map(futures::future::ready)
            .collect()
            .await;

        tracing::debug!(
            chunk_count,
            succeeded = summaries.len(),
            "Chunk summarization finished"
        );

        let summary = match summaries.len() {
            0 => {
                tracing::warn!(chunk_count, "Every chunk summary failed, using naive summary");
                naive_summary(text, self.config.naive_fallback_sentences)
            }
            1 => summaries.remove(0),
            _ => self.combine(summaries).await,
        };

        let summary = summary.trim();
        if summary.is_empty() {
            return Err(SummarizationError::EmptySummary);
        }

        Ok(summary.to_string())
    }

    /// Sentences repeated across chunk summaries are dropped from the result.
    async fn combine(&self, summaries: Vec<String>) -> String {
        let joined = summaries.join(" ");
        if joined.chars().count() <= self.config.condense_threshold {
            return deduplicate_sentences(&joined);
        }

        let combined = match self.generate(&self.prompts.condense(&joined)).await {
            Ok(condensed) if !condensed.is_empty() => condensed,
            Ok(_) => {
                tracing::warn!("Condensing pass returned nothing, keeping joined summaries");
                joined
            }
            Err(e) => {
                tracing::warn!(error = %e, "Condensing pass failed, keeping joined summaries");
                joined
            }
        };

        deduplicate_sentences(&combined)
    }

    async fn summarize_chunk(&self, chunk: Chunk) -> Option<String> {
        match self.generate(&self.prompts.summarize(&chunk.text)).await {
            Ok(summary) if !summary.is_empty() => Some(summary),
            Ok(_) => {
                tracing::warn!(chunk_index = chunk.index, "Chunk summary was empty");
                None
            }
            Err(e) => {
                tracing::warn!(chunk_index = chunk.index, error = %e, "Chunk summary failed");
                None
            }
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmClientError> {
        let timeout = self.config.call_timeout;
        let response = tokio::time::timeout(
            timeout,
            self.llm_client
                .complete(prompt, self.config.max_summary_tokens),
        )
        .await
        .map_err(|_| LlmClientError::Timeout(timeout.as_millis() as u64))??;

        Ok(clean_generated_summary(&response))
    }
}
