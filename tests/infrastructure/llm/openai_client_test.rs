use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use edgescribe::application::ports::{LlmClient, LlmClientError};
use edgescribe::infrastructure::llm::OpenAiClient;

use crate::helpers::spawn_stub_server;

async fn chat_completions(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
    match prompt {
        "fail" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "boom" }))),
        "empty" => (StatusCode::OK, Json(json!({ "choices": [] }))),
        _ => (
            StatusCode::OK,
            Json(json!({
                "choices": [{
                    "message": {
                        "role": "assistant",
                        "content": format!(" {} via {} ", prompt, body["model"].as_str().unwrap_or_default())
                    }
                }]
            })),
        ),
    }
}

async fn client() -> OpenAiClient {
    let router = Router::new().route("/v1/chat/completions", post(chat_completions));
    let base_url = spawn_stub_server(router).await;
    OpenAiClient::new(
        reqwest::Client::new(),
        format!("{}/v1/", base_url),
        "sk-test".to_string(),
        "gpt-4o-mini".to_string(),
        0.3,
    )
}

#[tokio::test]
async fn given_prompt_when_completing_then_first_choice_returned() {
    let out = client().await.complete("hello", 100).await.unwrap();

    assert_eq!(out, "hello via gpt-4o-mini");
}

#[tokio::test]
async fn given_server_error_when_completing_then_request_failed() {
    let err = client().await.complete("fail", 100).await.unwrap_err();

    assert!(matches!(err, LlmClientError::ApiRequestFailed(_)));
}

#[tokio::test]
async fn given_no_choices_when_completing_then_empty_response() {
    let err = client().await.complete("empty", 100).await.unwrap_err();

    assert!(matches!(err, LlmClientError::EmptyResponse));
}
