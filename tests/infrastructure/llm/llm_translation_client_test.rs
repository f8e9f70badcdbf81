use std::sync::Arc;

use edgescribe::application::ports::{LlmClientError, TranslationClient};
use edgescribe::application::prompts::PromptTemplates;
use edgescribe::domain::LanguageCode;
use edgescribe::infrastructure::llm::LlmTranslationClient;

use crate::helpers::ScriptedLlmClient;

fn spanish() -> LanguageCode {
    LanguageCode::parse("es").unwrap()
}

#[tokio::test]
async fn given_tagged_response_when_translating_then_tag_content_returned() {
    let llm = Arc::new(ScriptedLlmClient::new(
        "Thinking...\n<final_translation> Hola __PROTECTED_0__. </final_translation>\nDone",
    ));
    let client = LlmTranslationClient::new(llm.clone(), PromptTemplates::default());

    let out = client
        .translate("Hello __PROTECTED_0__.", LanguageCode::ENGLISH, spanish())
        .await
        .unwrap();

    assert_eq!(out, "Hola __PROTECTED_0__.");
    let prompt = &llm.prompts()[0];
    assert!(prompt.contains("from English into Spanish"));
    assert!(prompt.contains("Hello __PROTECTED_0__."));
}

#[tokio::test]
async fn given_untagged_response_when_translating_then_stray_tags_stripped() {
    let llm = Arc::new(ScriptedLlmClient::new("<answer>Hola mundo.</answer>"));
    let client = LlmTranslationClient::new(llm, PromptTemplates::default());

    let out = client
        .translate("Hello world.", LanguageCode::ENGLISH, spanish())
        .await
        .unwrap();

    assert_eq!(out, "Hola mundo.");
}

#[tokio::test]
async fn given_empty_tagged_response_when_translating_then_empty_response_error() {
    let llm = Arc::new(ScriptedLlmClient::new("<final_translation></final_translation>"));
    let client = LlmTranslationClient::new(llm, PromptTemplates::default());

    let err = client
        .translate("Hello.", LanguageCode::ENGLISH, spanish())
        .await
        .unwrap_err();

    assert!(matches!(err, LlmClientError::EmptyResponse));
}

#[tokio::test]
async fn given_inner_client_when_named_then_prefixed() {
    let client = LlmTranslationClient::new(
        Arc::new(ScriptedLlmClient::new("x")),
        PromptTemplates::default(),
    );

    assert_eq!(client.name(), "llm:scripted");
}

#[tokio::test]
async fn given_token_budget_when_translating_then_budget_passed_to_model() {
    let llm = Arc::new(ScriptedLlmClient::new("<final_translation>Hola.</final_translation>"));
    let client =
        LlmTranslationClient::new(llm.clone(), PromptTemplates::default()).with_max_tokens(256);

    client
        .translate("Hello.", LanguageCode::ENGLISH, spanish())
        .await
        .unwrap();

    assert_eq!(llm.max_tokens(), vec![256]);
}
