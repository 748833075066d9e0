//! Public surface: `GET /api/v1/health`, `GET /`, `GET /static/*`.
//!
//! The router is built in-process and driven with `tower::ServiceExt::oneshot`;
//! static assets come from a throwaway directory so the tests never depend on
//! the checked-in `public/` content.

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use supafast_api::app::build_router;
use supafast_api::config::{AppEnv, Config};
use supafast_api::state::AppState;

const INDEX_TEMPLATE: &str = concat!(
    "<!DOCTYPE html>\n",
    "<html>\n",
    "<head><meta name=\"supabase-anon-key\" content=\"\"></head>\n",
    "<body><h1>SupaFast</h1></body>\n",
    "</html>\n",
);

fn test_config(public_dir: &Path) -> Config {
    Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        app_env: AppEnv::Development,
        jwt_secret: "test-signing-secret".to_string(),
        anon_key: "anon-key-abc123".to_string(),
        public_dir: public_dir.to_path_buf(),
    }
}

fn create_test_app(public_dir: &Path) -> Router {
    build_router(AppState::new(&test_config(public_dir)))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_returns_fixed_payload() {
    let tmp = tempfile::tempdir().unwrap();
    let app = create_test_app(tmp.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn root_substitutes_anon_key_into_template() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("index.html"), INDEX_TEMPLATE).unwrap();
    let app = create_test_app(tmp.path());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .starts_with("text/html")
    );

    let html = body_string(response).await;
    // The marker is filled and nothing else changes.
    assert_eq!(
        html,
        INDEX_TEMPLATE.replace("content=\"\"", "content=\"anon-key-abc123\"")
    );
    assert!(html.contains("content=\"anon-key-abc123\""));
    assert!(!html.contains("content=\"\""));
}

#[tokio::test]
async fn root_without_index_html_is_internal_error() {
    let tmp = tempfile::tempdir().unwrap();
    // No index.html written.
    let app = create_test_app(tmp.path());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body, json!({"detail": "internal server error"}));
}

#[tokio::test]
async fn static_serves_file_bytes() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("app.js"), "console.log('static');\n").unwrap();
    let app = create_test_app(tmp.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/app.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "console.log('static');\n");
}

#[tokio::test]
async fn static_unknown_file_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let app = create_test_app(tmp.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/missing.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
