#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue};
use axum_test::{TestRequest, TestServer};
use serde_json::{json, Value};

use va_sandbox_lib::REQUIRED_HEADERS;
use va_sandbox_service::{build_router, MetricsConfig};

pub fn server() -> TestServer {
    TestServer::new(build_router(&MetricsConfig::default())).unwrap()
}

pub fn header(name: &str) -> HeaderName {
    HeaderName::from_bytes(name.as_bytes()).unwrap()
}

/// Attach every required header except those listed in `skip`.
pub fn with_headers_except(mut request: TestRequest, skip: &[&str]) -> TestRequest {
    for name in REQUIRED_HEADERS {
        if !skip.contains(&name) {
            request = request.add_header(header(name), HeaderValue::from_static("sandbox"));
        }
    }
    request
}

pub fn with_headers(request: TestRequest) -> TestRequest {
    with_headers_except(request, &[])
}

pub fn create_body() -> Value {
    json!({
        "partnerServiceId": "   88899",
        "customerNo": "12345678901234567890",
        "virtualAccountNo": "   8889912345678901234567890",
        "virtualAccountName": "Jokul Doe",
        "virtualAccountEmail": "jokul@email.com",
        "trxId": "abcdefgh1234",
        "totalAmount": {"value": "12345678.00", "currency": "IDR"},
        "billDetails": [
            {"billDescription": {"english": "Maintenance", "indonesia": "Pemeliharaan"}}
        ],
        "expiredDate": "2030-07-01T09:00:00+07:00",
        "additionalInfo": {"insertId": "ins-0001"}
    })
}

pub fn delete_body() -> Value {
    json!({
        "partnerServiceId": "   88899",
        "customerNo": "12345678901234567890",
        "virtualAccountNo": "   8889912345678901234567890",
        "trxId": "abcdefgh1234"
    })
}

/// Assert the shared 400 envelope and return its message.
pub fn assert_rejected(body: &Value) -> String {
    assert_eq!(body["responseCode"], "5002700");
    let data = &body["virtualAccountData"];
    assert_eq!(data["virtualAccountNo"], "");
    assert_eq!(data["expiredDate"], "0001-01-01T00:00:00Z");
    assert_eq!(data["billDetails"], Value::Null);
    assert_eq!(data["additionalInfo"], json!({}));
    body["responseMessage"].as_str().unwrap().to_string()
}
