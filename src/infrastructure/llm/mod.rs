mod client_factory;
mod llm_translation_client;
mod mock_llm_client;
mod model_chain;
mod openai_client;
mod workers_ai_client;

pub use client_factory::{AiClients, ClientFactory, ClientFactoryError};
pub use llm_translation_client::LlmTranslationClient;
pub use mock_llm_client::{MockLlmClient, MockTranslationClient};
pub use model_chain::ModelChain;
pub use openai_client::{OPENAI_BASE_URL, OpenAiClient};
pub use workers_ai_client::{WORKERS_AI_BASE_URL, WorkersAiClient};
