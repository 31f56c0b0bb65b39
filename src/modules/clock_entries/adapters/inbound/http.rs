use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::clock_entries::use_cases::sync_offline_entries::handler::SyncError;
use crate::shell::http::rejected_body;
use crate::shell::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(list_entries))
        .route("/sync", post(sync))
        .route("/sync/status", get(status))
        .route("/connectivity", get(connectivity).post(set_connectivity))
}

#[derive(Deserialize)]
pub struct ConnectivityBody {
    pub online: bool,
}

#[derive(Serialize)]
pub struct ConnectivityResponse {
    pub online: bool,
    pub changed: bool,
}

fn storage_failure(failure: SyncError) -> Response {
    error!(error = %failure, "clock entry storage failed");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

pub async fn list_entries(State(state): State<AppState>) -> Response {
    match state.entries.all_entries().await {
        Ok(entries) => Json(entries).into_response(),
        Err(failure) => storage_failure(failure.into()),
    }
}

pub async fn sync(State(state): State<AppState>) -> Response {
    match state.sync_engine.sync_all().await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(failure) => storage_failure(failure),
    }
}

pub async fn status(State(state): State<AppState>) -> Response {
    match state.sync_engine.status().await {
        Ok(status) => Json(status).into_response(),
        Err(failure) => storage_failure(failure),
    }
}

pub async fn connectivity(State(state): State<AppState>) -> Json<ConnectivityResponse> {
    Json(ConnectivityResponse {
        online: state.connectivity.is_online(),
        changed: false,
    })
}

/// The kiosk reports the browser's online and offline events here.
pub async fn set_connectivity(
    State(state): State<AppState>,
    body: Result<Json<ConnectivityBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };
    let changed = state.connectivity.set_online(body.online);
    Json(ConnectivityResponse {
        online: state.connectivity.is_online(),
        changed,
    })
    .into_response()
}
