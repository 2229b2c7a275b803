use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{AskRequest, AskResponse, ErrorResponse, HealthResponse};
use crate::AppState;

pub async fn ask(State(state): State<AppState>, Json(payload): Json<AskRequest>) -> Response {
    let text = payload.text.as_deref().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No text provided");
    }

    match state.orchestrator.generate(text).await {
        Ok(answer) => (StatusCode::OK, Json(AskResponse { answer })).into_response(),
        Err(failure) => {
            log::error!("Gemini Error: {}", failure);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, failure.error.to_string())
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.orchestrator.service().config().model.clone(),
    })
}

pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}
