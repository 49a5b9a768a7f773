//! 应用级集成测试：从配置文件一路到HTTP响应

#![cfg(unix)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use fanout::app::Application;
use fanout_config::AppConfig;
use serde_json::Value;
use tower::ServiceExt;

fn echo_config() -> AppConfig {
    AppConfig::from_toml(
        r#"
[api]
bind_address = "127.0.0.1:0"
cors_enabled = false
cors_origins = []

[dispatch]
request_timeout_seconds = 10

[[workers]]
name = "Echo"
command = "/bin/sh"
args = ["-c", "printf 'echo: %s\n' \"$1\"", "sh"]
timeout_seconds = 5

[[workers]]
name = "Broken"
command = "/bin/sh"
args = ["-c", "exit 1", "sh"]
timeout_seconds = 5

[observability]
log_level = "warn"
"#,
    )
    .expect("test config must parse")
}

#[tokio::test]
async fn test_full_pipeline_from_config_to_response() {
    let app = Application::new(echo_config()).unwrap();
    let router = app.router();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"input": "ping"}"#))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["Echo Output"], "echo: ping");
    assert_eq!(json["Broken Output"], fanout_core::ERROR_PLACEHOLDER);
}

#[tokio::test]
async fn test_empty_worker_list_fails_at_startup() {
    let result = AppConfig::from_toml(
        r#"
[api]
bind_address = "127.0.0.1:0"
cors_enabled = false
cors_origins = []

[dispatch]
request_timeout_seconds = 10

workers = []

[observability]
log_level = "info"
"#,
    );

    assert!(result.is_err());
}
