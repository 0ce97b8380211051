mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{delete_body, server, with_headers};
use va_sandbox_service::{
    build_router, MetricsConfig, CREATE_VA_PATH, DELETE_VA_PATH, STATUS_VA_PATH,
};

#[tokio::test]
async fn wrong_method_is_not_dispatched() {
    let server = server();

    let response = with_headers(server.post(DELETE_VA_PATH))
        .json(&delete_body())
        .await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let response = server.get(CREATE_VA_PATH).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let response = server.delete(STATUS_VA_PATH).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let server = server();
    let response = server.post("/v1.0/transfer-va/update-va").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn liveness_probe() {
    let server = server();

    let response = server.get("/health/live").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "va-sandbox-service");
}

#[tokio::test]
async fn metrics_route_follows_config() {
    let server = server();
    let response = server.get("/metrics").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let disabled = MetricsConfig {
        enabled: false,
        ..Default::default()
    };
    let server = axum_test::TestServer::new(build_router(&disabled)).unwrap();
    let response = server.get("/metrics").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
