use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use edgescribe::application::ports::{LlmClient, LlmClientError, TranslationClient};
use edgescribe::domain::LanguageCode;
use edgescribe::infrastructure::llm::WorkersAiClient;

use crate::helpers::spawn_stub_server;

async fn run_model(
    Path((account, model)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Bearer secret-token");
    if account != "acct" || !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "success": false })));
    }

    match model.as_str() {
        "@cf/meta/llama-3-8b-instruct" => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "result": { "response": format!("  tokens={} ", body["max_tokens"]) },
                "errors": []
            })),
        ),
        "@cf/meta/m2m100-1.2b" => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "result": {
                    "translated_text": format!(
                        "{}:{}:{}",
                        body["source_lang"].as_str().unwrap_or_default(),
                        body["target_lang"].as_str().unwrap_or_default(),
                        body["text"].as_str().unwrap_or_default()
                    )
                }
            })),
        ),
        "busy" => (StatusCode::TOO_MANY_REQUESTS, Json(json!({}))),
        _ => (
            StatusCode::OK,
            Json(json!({
                "success": false,
                "result": null,
                "errors": [{ "message": "No such model" }]
            })),
        ),
    }
}

async fn client(model: &str) -> WorkersAiClient {
    let router = Router::new().route("/accounts/{account}/ai/run/{*model}", post(run_model));
    let base_url = spawn_stub_server(router).await;
    WorkersAiClient::new(
        reqwest::Client::new(),
        base_url,
        "acct".to_string(),
        "secret-token".to_string(),
        model.to_string(),
    )
}

#[tokio::test]
async fn given_text_model_when_completing_then_response_field_trimmed() {
    let client = client("@cf/meta/llama-3-8b-instruct").await;

    let out = client.complete("Summarize this.", 350).await.unwrap();

    assert_eq!(out, "tokens=350");
}

#[tokio::test]
async fn given_translation_model_when_translating_then_codes_and_text_sent() {
    let client = client("@cf/meta/m2m100-1.2b").await;

    let out = client
        .translate("Hello.", LanguageCode::ENGLISH, LanguageCode::parse("fr").unwrap())
        .await
        .unwrap();

    assert_eq!(out, "en:fr:Hello.");
}

#[tokio::test]
async fn given_http_429_when_completing_then_rate_limited() {
    let client = client("busy").await;

    let err = client.complete("prompt", 10).await.unwrap_err();

    assert!(matches!(err, LlmClientError::RateLimited));
}

#[tokio::test]
async fn given_unsuccessful_envelope_when_completing_then_error_messages_surface() {
    let client = client("unknown-model").await;

    let err = client.complete("prompt", 10).await.unwrap_err();

    assert!(err.to_string().contains("No such model"));
}
