use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::application::services::{PipelineError, RawSummaryInput, ValidationError};
use crate::infrastructure::observability::text_preview;
use crate::presentation::state::AppState;

pub const CACHE_STATUS_HEADER: HeaderName = HeaderName::from_static("x-cache-status");

const FALLBACK_CLIENT_ID: &str = "127.0.0.1";

/// Fields stay loosely typed so a wrong JSON type reports the same
/// validation error as a missing field.
#[derive(Debug, Default, Deserialize)]
struct SummarizeBody {
    #[serde(default)]
    text: Option<Value>,
    #[serde(default, rename = "sourceLang")]
    source_lang: Option<Value>,
    #[serde(default, rename = "targetLang")]
    target_lang: Option<Value>,
}

impl SummarizeBody {
    fn as_input(&self) -> RawSummaryInput<'_> {
        RawSummaryInput {
            text: self.text.as_ref().and_then(Value::as_str),
            source_lang: self.source_lang.as_ref().and_then(Value::as_str),
            target_lang: self.target_lang.as_ref().and_then(Value::as_str),
        }
    }
}

#[tracing::instrument(skip_all)]
pub async fn summarize_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let client_id = client_id(&headers, &state.settings.rate_limit.client_ip_headers);

    let body = match parse_body(&headers, &body) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, client_id = %client_id, "Rejected request body");
            return PipelineError::from(e).into_response();
        }
    };

    let input = body.as_input();
    if let Some(text) = input.text {
        tracing::debug!(text = %text_preview(text), client_id = %client_id, "Summarize request");
    }

    match state.pipeline.run(&client_id, input).await {
        Ok(outcome) => {
            let mut response = Json(outcome.result).into_response();
            response.headers_mut().insert(
                CACHE_STATUS_HEADER,
                HeaderValue::from_static(outcome.cache_status.as_str()),
            );
            response
        }
        Err(e) => e.into_response(),
    }
}

fn parse_body(headers: &HeaderMap, body: &[u8]) -> Result<SummarizeBody, ValidationError> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.to_ascii_lowercase().contains("application/json"));
    if !is_json {
        return Err(ValidationError::UnsupportedContentType);
    }

    serde_json::from_slice(body).map_err(|_| ValidationError::MalformedBody)
}

/// First configured header that is present; for `x-forwarded-for` the
/// left-most address is the client.
pub fn client_id(headers: &HeaderMap, candidates: &[String]) -> String {
    candidates
        .iter()
        .filter_map(|name| headers.get(name.as_str()))
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(',').next())
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(FALLBACK_CLIENT_ID)
        .to_string()
}
