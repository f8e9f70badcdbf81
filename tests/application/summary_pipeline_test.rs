use std::sync::Arc;

use edgescribe::application::services::{
    AiServiceError, PipelineError, RawSummaryInput, ValidationError,
};
use edgescribe::domain::{CacheStatus, FailureKind};

use crate::helpers::{
    FailingLlmClient, FailingTranslationClient, ScriptedLlmClient, UppercaseTranslationClient,
    long_english_text, test_pipeline,
};

const CLIENT: &str = "198.51.100.9";

fn input<'a>(text: &'a str, source: &'a str, target: &'a str) -> RawSummaryInput<'a> {
    RawSummaryInput {
        text: Some(text),
        source_lang: Some(source),
        target_lang: Some(target),
    }
}

#[tokio::test]
async fn given_english_to_english_short_text_when_run_then_no_backend_calls() {
    let llm = Arc::new(ScriptedLlmClient::new("unused"));
    let translation = Arc::new(UppercaseTranslationClient::default());
    let app = test_pipeline(llm.clone(), translation.clone(), 60);

    let outcome = app
        .pipeline
        .run(CLIENT, input("Short text.", "en", "en"))
        .await
        .unwrap();

    assert_eq!(outcome.result.summary, "Short text.");
    assert_eq!(outcome.result.translated, "Short text.");
    assert_eq!(outcome.result.target_language.as_str(), "en");
    assert_eq!(outcome.cache_status, CacheStatus::Miss);
    assert_eq!(llm.calls(), 0);
    assert!(translation.calls().is_empty());
}

#[tokio::test]
async fn given_foreign_source_when_run_then_normalized_summarized_and_translated() {
    let llm = Arc::new(ScriptedLlmClient::new("Sales doubled in Paris."));
    let translation = Arc::new(UppercaseTranslationClient::default());
    let app = test_pipeline(llm.clone(), translation.clone(), 60);
    let text = long_english_text(5);

    let outcome = app.pipeline.run(CLIENT, input(&text, "fr", "de")).await.unwrap();

    let pairs: Vec<_> = translation
        .calls()
        .into_iter()
        .map(|(_, source, target)| (source, target))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("fr".to_string(), "en".to_string()),
            ("en".to_string(), "de".to_string()),
        ]
    );
    assert_eq!(llm.calls(), 1);
    assert_eq!(outcome.result.summary, "Sales doubled in Paris.");
    assert_eq!(outcome.result.translated, "SALES DOUBLED IN Paris.");
}

#[tokio::test]
async fn given_repeated_request_when_run_then_second_is_cache_hit() {
    let llm = Arc::new(ScriptedLlmClient::new("Summary."));
    let translation = Arc::new(UppercaseTranslationClient::default());
    let app = test_pipeline(llm.clone(), translation.clone(), 60);
    let text = long_english_text(5);

    let first = app.pipeline.run(CLIENT, input(&text, "en", "es")).await.unwrap();
    let second = app.pipeline.run(CLIENT, input(&text, "en", "es")).await.unwrap();

    assert_eq!(first.cache_status, CacheStatus::Miss);
    assert_eq!(second.cache_status, CacheStatus::Hit);
    assert_eq!(first.result, second.result);
    assert_eq!(llm.calls(), 1);
    assert_eq!(translation.calls().len(), 1);
    assert_eq!(app.cache_store.puts(), 1);
}

#[tokio::test]
async fn given_invalid_input_when_run_then_rejected_before_rate_limit_and_cache() {
    let app = test_pipeline(
        Arc::new(ScriptedLlmClient::new("unused")),
        Arc::new(UppercaseTranslationClient::default()),
        1,
    );

    for _ in 0..3 {
        let err = app
            .pipeline
            .run(CLIENT, input("Hello.", "xx", "en"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Validation(ValidationError::InvalidSourceLanguage)
        ));
    }

    assert_eq!(app.cache_store.gets(), 0);
    assert!(app.pipeline.run(CLIENT, input("Hello.", "en", "en")).await.is_ok());
}

#[tokio::test]
async fn given_limit_reached_when_run_then_rate_limit_error_without_cache_lookup() {
    let app = test_pipeline(
        Arc::new(ScriptedLlmClient::new("unused")),
        Arc::new(UppercaseTranslationClient::default()),
        2,
    );

    app.pipeline.run(CLIENT, input("One.", "en", "en")).await.unwrap();
    app.pipeline.run(CLIENT, input("Two.", "en", "en")).await.unwrap();
    let err = app
        .pipeline
        .run(CLIENT, input("Three.", "en", "en"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::RateLimit);
    assert_eq!(app.cache_store.gets(), 2);
}

#[tokio::test]
async fn given_normalization_failure_when_run_then_ai_service_error() {
    let app = test_pipeline(
        Arc::new(ScriptedLlmClient::new("unused")),
        Arc::new(FailingTranslationClient),
        60,
    );

    let err = app
        .pipeline
        .run(CLIENT, input("Hola a todos.", "es", "en"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::AiService(AiServiceError::Normalization(_))
    ));
    assert_eq!(app.cache_store.puts(), 0);
}

#[tokio::test]
async fn given_target_translation_failure_when_run_then_nothing_cached() {
    let app = test_pipeline(
        Arc::new(ScriptedLlmClient::new("Summary.")),
        Arc::new(FailingTranslationClient),
        60,
    );

    let err = app
        .pipeline
        .run(CLIENT, input("Short text.", "en", "ja"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::AiService(AiServiceError::Translation(_))
    ));
    assert_eq!(err.to_string(), "Translation failed to produce a valid response.");
    assert_eq!(app.cache_store.puts(), 0);
}

#[tokio::test]
async fn given_summarizer_down_when_run_then_naive_summary_still_returned() {
    let app = test_pipeline(
        Arc::new(FailingLlmClient),
        Arc::new(UppercaseTranslationClient::default()),
        60,
    );
    let text = long_english_text(5);

    let outcome = app.pipeline.run(CLIENT, input(&text, "en", "en")).await.unwrap();

    assert!(
        outcome
            .result
            .summary
            .starts_with("Sentence number 0 talks about the quarterly results in detail.")
    );
}
