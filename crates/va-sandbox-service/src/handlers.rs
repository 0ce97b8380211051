//! Virtual-account endpoint handlers.
//!
//! Handlers take the raw headers and body rather than a `Json` extractor so
//! that header checks always run before the body is looked at, and so that
//! decode failures produce the sandbox envelope instead of axum's rejection.

use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{info, warn};

use va_sandbox_lib::{
    accept, StatusVaResponse, ValidationError, VirtualAccountDeleteRequest, VirtualAccountRequest,
    VirtualAccountResponse,
};

use crate::metrics::{
    record_status_inquiry, record_va_created, record_va_deleted, record_validation_failed,
};

/// Response header carrying the server time on status inquiries.
pub const X_TIMESTAMP: &str = "x-timestamp";

/// HTTP reply: a success envelope, or a rejection rendered as the 400 envelope.
#[derive(Debug)]
pub enum Reply<T> {
    Success(T),
    Rejected(ValidationError),
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        match self {
            Reply::Success(body) => (StatusCode::OK, Json(body)).into_response(),
            Reply::Rejected(error) => (
                StatusCode::BAD_REQUEST,
                Json(VirtualAccountResponse::rejected(&error)),
            )
                .into_response(),
        }
    }
}

fn reject<T>(endpoint: &str, error: ValidationError) -> Reply<T> {
    warn!(endpoint, reason = error.reason(), detail = %error, "request rejected");
    record_validation_failed(endpoint, error.reason());
    Reply::Rejected(error)
}

/// Handle `POST /v1.0/transfer-va/create-va`.
pub async fn create_va(headers: HeaderMap, body: Bytes) -> Reply<VirtualAccountResponse> {
    let request: VirtualAccountRequest = match accept(&headers, &body) {
        Ok(request) => request,
        Err(error) => return reject("create", error),
    };

    info!(
        partner_service_id = %request.partner_service_id,
        virtual_account_no = %request.virtual_account_no,
        trx_id = %request.trx_id,
        "virtual account created"
    );
    record_va_created(&request.total_amount.currency);

    Reply::Success(VirtualAccountResponse::created(request, Utc::now()))
}

/// Handle `DELETE /v1.0/transfer-va/delete-va`.
pub async fn delete_va(headers: HeaderMap, body: Bytes) -> Reply<VirtualAccountResponse> {
    let request: VirtualAccountDeleteRequest = match accept(&headers, &body) {
        Ok(request) => request,
        Err(error) => return reject("delete", error),
    };

    info!(
        virtual_account_no = %request.virtual_account_no,
        trx_id = %request.trx_id,
        "virtual account deleted"
    );
    record_va_deleted();

    Reply::Success(VirtualAccountResponse::deleted(request))
}

/// Handle `POST /v1.0/transfer-va/status`.
///
/// Always answers with the canned paid account; the request is not inspected.
pub async fn status_va() -> Response {
    record_status_inquiry();

    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut response = (StatusCode::OK, Json(StatusVaResponse::sandbox())).into_response();

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&timestamp) {
        headers.insert(HeaderName::from_static(X_TIMESTAMP), value);
    }
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    response
}
