use edgescribe::application::ports::{LlmClient, TranslationClient};
use edgescribe::application::prompts::PromptTemplates;
use edgescribe::infrastructure::llm::{ClientFactory, ClientFactoryError};
use edgescribe::presentation::config::{AiProvider, AiSettings};

#[test]
fn given_mock_provider_when_creating_then_mock_clients_returned() {
    let clients = ClientFactory::create(&AiSettings::default(), &PromptTemplates::default())
        .unwrap();

    assert_eq!(clients.llm.name(), "mock");
    assert_eq!(clients.translation.name(), "mock");
}

#[test]
fn given_workers_ai_without_account_when_creating_then_missing_setting() {
    let settings = AiSettings {
        provider: AiProvider::WorkersAi,
        api_key: Some("token".to_string()),
        ..AiSettings::default()
    };

    let result = ClientFactory::create(&settings, &PromptTemplates::default());

    assert!(matches!(
        result,
        Err(ClientFactoryError::MissingSetting("ai.account_id", "workers_ai"))
    ));
}

#[test]
fn given_workers_ai_with_fallback_models_when_creating_then_chains_built() {
    let settings = AiSettings {
        provider: AiProvider::WorkersAi,
        account_id: Some("acct".to_string()),
        api_key: Some("token".to_string()),
        summarization_models: vec!["primary".to_string(), "backup".to_string()],
        ..AiSettings::default()
    };

    let clients = ClientFactory::create(&settings, &PromptTemplates::default()).unwrap();

    assert_eq!(clients.llm.name(), "primary -> backup");
    assert_eq!(clients.translation.name(), "@cf/meta/m2m100-1.2b");
}

#[test]
fn given_openai_without_translation_models_when_creating_then_chat_models_translate() {
    let settings = AiSettings {
        provider: AiProvider::OpenAi,
        api_key: Some("sk-test".to_string()),
        summarization_models: vec!["gpt-4o-mini".to_string()],
        translation_models: Vec::new(),
        ..AiSettings::default()
    };

    let clients = ClientFactory::create(&settings, &PromptTemplates::default()).unwrap();

    assert_eq!(clients.llm.name(), "gpt-4o-mini");
    assert_eq!(clients.translation.name(), "llm:gpt-4o-mini");
}

#[test]
fn given_openai_with_only_chat_model_set_when_creating_then_no_workers_model_leaks_in() {
    let settings = AiSettings {
        provider: AiProvider::OpenAi,
        api_key: Some("sk-test".to_string()),
        summarization_models: vec!["gpt-4o-mini".to_string()],
        ..AiSettings::default()
    };

    let clients = ClientFactory::create(&settings, &PromptTemplates::default()).unwrap();

    assert_eq!(clients.translation.name(), "llm:gpt-4o-mini");
}

#[test]
fn given_workers_ai_without_models_when_creating_then_default_models_used() {
    let settings = AiSettings {
        provider: AiProvider::WorkersAi,
        account_id: Some("acct".to_string()),
        api_key: Some("token".to_string()),
        ..AiSettings::default()
    };

    let clients = ClientFactory::create(&settings, &PromptTemplates::default()).unwrap();

    assert_eq!(clients.llm.name(), "@cf/meta/llama-3-8b-instruct");
    assert_eq!(clients.translation.name(), "@cf/meta/m2m100-1.2b");
}

#[test]
fn given_no_summarization_models_when_creating_then_error() {
    let settings = AiSettings {
        provider: AiProvider::OpenAi,
        api_key: Some("sk-test".to_string()),
        summarization_models: Vec::new(),
        ..AiSettings::default()
    };

    let result = ClientFactory::create(&settings, &PromptTemplates::default());

    assert!(matches!(result, Err(ClientFactoryError::NoModels("summarization"))));
}
