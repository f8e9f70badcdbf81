use edgescribe::domain::{LanguageCode, SummaryResult};

#[test]
fn given_cached_json_when_deserialized_then_result_is_rebuilt() {
    let raw = r#"{"summary":"Sales rose.","translated":"Las ventas subieron.","target_language":"es"}"#;

    let result: SummaryResult = serde_json::from_str(raw).unwrap();

    assert_eq!(result.summary, "Sales rose.");
    assert_eq!(result.translated, "Las ventas subieron.");
    assert_eq!(result.target_language, LanguageCode::parse("es").unwrap());
}

#[test]
fn given_cached_json_with_unknown_language_when_deserialized_then_rejected() {
    let raw = r#"{"summary":"a","translated":"b","target_language":"xx"}"#;

    assert!(serde_json::from_str::<SummaryResult>(raw).is_err());
}
