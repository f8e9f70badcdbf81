use std::any::Any;
use std::time::Duration;

use axum::Router;
use axum::extract::Request;
use axum::http::{Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::services::PipelineError;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    debug_handler, fallback_handler, health_handler, summarize_handler,
};
use crate::presentation::state::AppState;

const CORS_MAX_AGE: Duration = Duration::from_secs(86_400);

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(CORS_MAX_AGE);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", post(summarize_handler).fallback(fallback_handler))
        .route(
            "/api/summarize",
            post(summarize_handler).fallback(fallback_handler),
        )
        .route("/health", get(health_handler).fallback(fallback_handler))
        .route("/debug", get(debug_handler).fallback(fallback_handler))
        .fallback(fallback_handler)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .layer(middleware::from_fn(preflight_no_content))
        .with_state(state)
}

/// `CorsLayer` answers every `OPTIONS` request itself with 200; clients of
/// this API expect 204.
async fn preflight_no_content(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let mut response = next.run(request).await;
    if is_options && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    PipelineError::Internal(detail.to_string()).into_response()
}
