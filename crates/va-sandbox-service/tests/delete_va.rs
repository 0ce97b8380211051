mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{assert_rejected, delete_body, server, with_headers, with_headers_except};
use va_sandbox_service::DELETE_VA_PATH;

#[tokio::test]
async fn delete_echoes_identifiers_only() {
    let server = server();

    let response = with_headers(server.delete(DELETE_VA_PATH))
        .json(&delete_body())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let out: Value = response.json();
    assert_eq!(out["responseCode"], "2003100");
    assert_eq!(out["responseMessage"], "Success");

    let data = &out["virtualAccountData"];
    assert_eq!(data["partnerServiceId"], "   88899");
    assert_eq!(data["customerNo"], "12345678901234567890");
    assert_eq!(data["virtualAccountNo"], "   8889912345678901234567890");
    assert_eq!(data["trxId"], "abcdefgh1234");

    assert_eq!(data["virtualAccountName"], "");
    assert_eq!(data["virtualAccountEmail"], "");
    assert_eq!(data["totalAmount"], json!({"value": "", "currency": ""}));
    assert_eq!(data["billDetails"], Value::Null);
    assert_eq!(data["expiredDate"], "0001-01-01T00:00:00Z");
    assert_eq!(data["additionalInfo"], json!({}));
}

#[tokio::test]
async fn delete_needs_only_virtual_account_no() {
    let server = server();

    let response = with_headers(server.delete(DELETE_VA_PATH))
        .json(&json!({"virtualAccountNo": "   1"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let out: Value = response.json();
    assert_eq!(out["virtualAccountData"]["virtualAccountNo"], "   1");
    assert_eq!(out["virtualAccountData"]["partnerServiceId"], "");
}

#[tokio::test]
async fn delete_rejects_empty_virtual_account_no() {
    let server = server();

    for body in [
        json!({"partnerServiceId": "   88899", "virtualAccountNo": ""}),
        json!({"partnerServiceId": "   88899"}),
        json!({"virtualAccountNo": null}),
    ] {
        let response = with_headers(server.delete(DELETE_VA_PATH)).json(&body).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            assert_rejected(&response.json()),
            "Missing required field: virtualAccountNo"
        );
    }
}

#[tokio::test]
async fn delete_reports_missing_header() {
    let server = server();

    let response = with_headers_except(server.delete(DELETE_VA_PATH), &["X-PARTNER-ID"])
        .json(&delete_body())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        assert_rejected(&response.json()),
        "Missing required header: X-PARTNER-ID"
    );
}

#[tokio::test]
async fn delete_rejects_malformed_json() {
    let server = server();

    let response = with_headers(server.delete(DELETE_VA_PATH))
        .bytes(Bytes::from_static(b"virtualAccountNo=1"))
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(assert_rejected(&response.json()), "Invalid JSON format");
}

#[tokio::test]
async fn delete_is_deterministic() {
    let server = server();

    let first = with_headers(server.delete(DELETE_VA_PATH))
        .json(&delete_body())
        .await
        .text();
    let second = with_headers(server.delete(DELETE_VA_PATH))
        .json(&delete_body())
        .await
        .text();

    assert_eq!(first, second);
}
