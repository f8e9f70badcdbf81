use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use super::ErrorResponse;
use crate::presentation::state::AppState;

/// Static assets when a directory is configured, else a JSON 404.
pub async fn fallback_handler(State(state): State<AppState>, request: Request) -> Response {
    let Some(static_dir) = state.settings.server.static_dir.as_ref() else {
        return not_found();
    };

    match ServeDir::new(static_dir).oneshot(request).await {
        Ok(response) if response.status() == StatusCode::NOT_FOUND => not_found(),
        Ok(response) => response.into_response(),
        Err(e) => match e {},
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not Found"))).into_response()
}
