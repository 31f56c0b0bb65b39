use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};

use crate::modules::roster::core::employee::Employee;
use crate::modules::roster::core::view::{EmployeeQuery, SortDirection, SortField, TimeFilter};
use crate::modules::roster::use_cases::browse_employees::view_model::EmployeeViewModel;
use crate::modules::roster::use_cases::validate_new_employee::form::NewEmployeeForm;
use crate::shell::http::{error_message, rejected_body, unprocessable};
use crate::shell::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list))
        .route("/employees/query", put(set_query))
        .route("/employees/sort", post(toggle_sort))
        .route("/employees/validate", post(validate))
        .route("/employees/{id}", get(detail))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListResponse {
    pub query: EmployeeQuery,
    pub rows: Vec<Employee>,
}

impl From<&EmployeeViewModel> for EmployeeListResponse {
    fn from(view: &EmployeeViewModel) -> Self {
        Self {
            query: view.query().clone(),
            rows: view.rows().to_vec(),
        }
    }
}

/// Query as the admin's filter bar sends it; dates are `YYYY-MM-DD` or empty.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryBody {
    pub search_text: String,
    pub time_filter: String,
    pub start_date: String,
    pub end_date: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

#[derive(Deserialize)]
pub struct SortBody {
    pub field: SortField,
}

pub async fn list(State(state): State<AppState>) -> Json<EmployeeListResponse> {
    let mut view = state.employees.lock().await;
    view.set_today(state.clock.today());
    Json(EmployeeListResponse::from(&*view))
}

pub async fn set_query(
    State(state): State<AppState>,
    body: Result<Json<QueryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };
    let time_filter = match TimeFilter::from_parts(&body.time_filter, &body.start_date, &body.end_date) {
        Ok(filter) => filter,
        Err(errors) => return unprocessable(errors),
    };

    let mut view = state.employees.lock().await;
    view.set_today(state.clock.today());
    view.apply(EmployeeQuery {
        search_text: body.search_text,
        time_filter,
        sort_field: body.sort_field,
        sort_direction: body.sort_direction,
    });
    Json(EmployeeListResponse::from(&*view)).into_response()
}

pub async fn toggle_sort(
    State(state): State<AppState>,
    body: Result<Json<SortBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };
    let mut view = state.employees.lock().await;
    view.set_today(state.clock.today());
    view.toggle_sort(body.field);
    Json(EmployeeListResponse::from(&*view)).into_response()
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<u32>) -> Response {
    let view = state.employees.lock().await;
    match view.employee(id) {
        Some(employee) => Json(employee.clone()).into_response(),
        None => error_message(StatusCode::NOT_FOUND, format!("employee {id} not found")),
    }
}

pub async fn validate(body: Result<Json<NewEmployeeForm>, JsonRejection>) -> Response {
    let Json(form) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };
    match form.validate() {
        Ok(draft) => Json(draft).into_response(),
        Err(errors) => unprocessable(errors),
    }
}
