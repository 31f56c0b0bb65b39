use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use crate::modules::branding::core::theme::CompanyTheme;
use crate::shared::core::validation::ValidationErrors;
use crate::shell::http::{rejected_body, unprocessable};
use crate::shell::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/themes", get(list))
        .route("/theme", get(current).post(select))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectThemeBody {
    pub theme_id: String,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<CompanyTheme>> {
    Json(state.themes.catalog().all().to_vec())
}

pub async fn current(State(state): State<AppState>) -> Json<CompanyTheme> {
    Json(state.themes.current())
}

pub async fn select(
    State(state): State<AppState>,
    body: Result<Json<SelectThemeBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected_body(rejection),
    };
    if !state.themes.select(&body.theme_id) {
        return unprocessable(ValidationErrors::single("themeId", "Unknown brand theme"));
    }
    Json(state.themes.current()).into_response()
}

#[cfg(test)]
mod branding_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::routes;
    use crate::shell::state::AppState;
    use crate::test_support::fixtures::{test_app, test_config};

    fn app(state: AppState) -> Router {
        routes().with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_list_the_catalog() {
        let state = test_app(&test_config()).await.state;
        let response = app(state)
            .oneshot(Request::get("/themes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().map(Vec::len), Some(3));
        assert_eq!(json[1]["className"], "theme-blue");
        assert_eq!(json[1]["primaryColor"], "hsl(217, 91%, 60%)");
    }

    #[tokio::test]
    async fn it_should_start_on_the_configured_theme() {
        let mut config = test_config();
        config.default_theme = "dark".into();
        let response = app(test_app(&config).await.state)
            .oneshot(Request::get("/theme").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await["name"], "Premium Estates");
    }

    #[tokio::test]
    async fn it_should_switch_themes_and_reject_unknown_ones() {
        let state = test_app(&test_config()).await.state;
        let post = |theme: &str| {
            Request::post("/theme")
                .header("content-type", "application/json")
                .body(Body::from(format!(r#"{{"themeId":"{theme}"}}"#)))
                .unwrap()
        };

        let response = app(state.clone()).oneshot(post("blue")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["id"], "blue");

        let response = app(state.clone()).oneshot(post("neon")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(state.themes.current().id, "blue");
    }
}
