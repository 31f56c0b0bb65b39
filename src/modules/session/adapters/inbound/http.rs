use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::session::core::state::{Screen, SessionState};
use crate::modules::session::use_cases::controller::SessionError;
use crate::modules::session::use_cases::register_admin::AdminRegistrationForm;
use crate::shell::http::{error_message, rejected_body, unprocessable};
use crate::shell::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(current))
        .route("/session/screen", post(navigate))
        .route("/session/admin/register", post(register_admin))
        .route("/session/admin/login", post(login_admin))
        .route("/session/employee/login", post(login_employee))
        .route("/session/clock-in", post(clock_in))
        .route("/session/clock-out", post(clock_out))
        .route("/session/logout", post(logout))
}

/// Session snapshot plus the flags the kiosk derives from it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    #[serde(flatten)]
    pub state: SessionState,
    pub is_logged_in: bool,
    pub is_clocked_in: bool,
}

impl From<SessionState> for SessionView {
    fn from(state: SessionState) -> Self {
        Self {
            is_logged_in: state.is_logged_in(),
            is_clocked_in: state.is_clocked_in(),
            state,
        }
    }
}

#[derive(Deserialize)]
pub struct NavigateBody {
    pub screen: Screen,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminLoginBody {
    pub property_id: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeLoginBody {
    pub access_code: String,
}

fn respond(result: Result<SessionState, SessionError>) -> Response {
    match result {
        Ok(state) => Json(SessionView::from(state)).into_response(),
        Err(SessionError::Invalid(errors)) => unprocessable(errors),
        Err(SessionError::AccessDenied) => error_message(
            StatusCode::UNAUTHORIZED,
            "Invalid employee access code. Please check and try again.",
        ),
        Err(SessionError::Domain(rejection)) => {
            error_message(StatusCode::CONFLICT, rejection.to_string())
        }
        Err(SessionError::Storage(failure)) => {
            error!(error = %failure, "session storage failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn current(State(state): State<AppState>) -> Json<SessionView> {
    Json(SessionView::from(state.session.snapshot()))
}

pub async fn navigate(
    State(state): State<AppState>,
    body: Result<Json<NavigateBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };
    respond(state.session.navigate(body.screen).await)
}

pub async fn register_admin(
    State(state): State<AppState>,
    body: Result<Json<AdminRegistrationForm>, JsonRejection>,
) -> Response {
    let Json(form) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };
    respond(state.session.register_admin(form).await)
}

pub async fn login_admin(
    State(state): State<AppState>,
    body: Result<Json<AdminLoginBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };
    respond(state.session.login_admin(&body.property_id).await)
}

pub async fn login_employee(
    State(state): State<AppState>,
    body: Result<Json<EmployeeLoginBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };
    respond(state.session.login_employee(&body.access_code).await)
}

pub async fn clock_in(State(state): State<AppState>) -> Response {
    respond(state.session.clock_in().await)
}

pub async fn clock_out(State(state): State<AppState>) -> Response {
    respond(state.session.clock_out().await)
}

pub async fn logout(State(state): State<AppState>) -> Json<SessionView> {
    Json(SessionView::from(state.session.logout().await))
}
