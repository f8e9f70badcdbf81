use std::sync::Arc;

use edgescribe::application::services::TranslationError;
use edgescribe::domain::LanguageCode;

use crate::helpers::{
    FailingTranslationClient, FixedTranslationClient, UppercaseTranslationClient,
    test_translator,
};

fn lang(code: &str) -> LanguageCode {
    LanguageCode::parse(code).unwrap()
}

#[tokio::test]
async fn given_same_languages_when_translating_then_backend_not_called() {
    let client = Arc::new(UppercaseTranslationClient::default());
    let translator = test_translator(client.clone());

    let out = translator.translate("Hola.", lang("es"), lang("es")).await.unwrap();

    assert_eq!(out, "Hola.");
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn given_protected_terms_when_translating_then_backend_sees_placeholders_only() {
    let client = Arc::new(UppercaseTranslationClient::default());
    let translator = test_translator(client.clone());

    let out = translator
        .translate("We met in Paris at Google.", lang("en"), lang("fr"))
        .await
        .unwrap();

    let calls = client.calls();
    assert_eq!(calls[0].0, "We met in __PROTECTED_0__ at __PROTECTED_1__.");
    assert_eq!(out, "WE MET IN Paris AT Google.");
}

#[tokio::test]
async fn given_fallback_language_when_translating_then_effective_code_sent() {
    let client = Arc::new(UppercaseTranslationClient::default());
    let translator = test_translator(client.clone());

    translator
        .translate("Good morning.", lang("en"), lang("ca"))
        .await
        .unwrap();

    assert_eq!(client.calls()[0].1, "en");
    assert_eq!(client.calls()[0].2, "es");
}

#[tokio::test]
async fn given_backend_failure_when_translating_then_error_carries_pair() {
    let translator = test_translator(Arc::new(FailingTranslationClient));

    let err = translator
        .translate("Hello.", lang("en"), lang("de"))
        .await
        .unwrap_err();

    assert!(matches!(err, TranslationError::Backend { .. }));
    assert!(err.to_string().contains("en->de"));
}

#[tokio::test]
async fn given_blank_backend_output_when_translating_then_empty_output_error() {
    let translator = test_translator(Arc::new(FixedTranslationClient("   ")));

    let err = translator
        .translate("Hello.", lang("en"), lang("it"))
        .await
        .unwrap_err();

    assert!(matches!(err, TranslationError::EmptyOutput { .. }));
}

#[tokio::test]
async fn given_two_non_english_languages_when_translating_via_english_then_two_hops() {
    let client = Arc::new(UppercaseTranslationClient::default());
    let translator = test_translator(client.clone());

    translator
        .translate_via_english("Bonjour.", lang("fr"), lang("de"))
        .await
        .unwrap();

    let pairs: Vec<_> = client
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
}
