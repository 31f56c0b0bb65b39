use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::modules::branding::adapters::inbound::http as branding_http;
use crate::modules::clock_entries::adapters::inbound::http as clock_entries_http;
use crate::modules::roster::adapters::inbound::http as roster_http;
use crate::modules::session::adapters::inbound::http as session_http;
use crate::shared::core::validation::ValidationErrors;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(session_http::routes())
        .merge(branding_http::routes())
        .merge(roster_http::routes())
        .merge(clock_entries_http::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn unprocessable(errors: ValidationErrors) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
}

/// Malformed or missing JSON bodies are reported like field errors.
pub fn rejected_body(rejection: JsonRejection) -> Response {
    unprocessable(ValidationErrors::single("body", rejection.body_text()))
}

pub fn error_message(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
