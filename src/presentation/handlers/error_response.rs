use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PipelineError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_unavailable: Option<bool>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            retry_after: None,
            service_unavailable: None,
        }
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        match self {
            PipelineError::Validation(e) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))).into_response()
            }
            PipelineError::RateLimit(e) => {
                let seconds = e.retry_after.as_secs().max(1);
                let body = ErrorResponse {
                    retry_after: Some(seconds),
                    ..ErrorResponse::new(e.to_string())
                };
                let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
                response
                    .headers_mut()
                    .insert(header::RETRY_AFTER, HeaderValue::from(seconds));
                response
            }
            PipelineError::AiService(e) => {
                let body = ErrorResponse {
                    service_unavailable: Some(true),
                    ..ErrorResponse::new(e.to_string())
                };
                (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
            }
            PipelineError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error");
                internal_error_response()
            }
        }
    }
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}
