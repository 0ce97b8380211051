//! Body decoding for virtual-account requests.

use serde::de::DeserializeOwned;

use crate::error::DecodeError;

/// Media type accepted for request bodies.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Decode a raw request body into `T`.
///
/// An empty body decodes to `T::default()` so that a request without a body
/// reaches field validation rather than failing here. A non-empty body must
/// be declared as JSON (parameters such as `charset` are allowed) and must
/// match the shape of `T`. A bare JSON `null` leaves `T` at its default.
pub fn decode_body<T>(content_type: Option<&str>, body: &[u8]) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Default,
{
    if body.is_empty() {
        return Ok(T::default());
    }

    let media_type = content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .unwrap_or("");
    if !media_type.eq_ignore_ascii_case(JSON_MEDIA_TYPE) {
        return Err(DecodeError::UnsupportedMediaType(media_type.to_string()));
    }

    if body.trim_ascii() == b"null" {
        return Ok(T::default());
    }

    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{VirtualAccountDeleteRequest, VirtualAccountRequest};

    #[test]
    fn test_empty_body_yields_default() {
        let req: VirtualAccountRequest = decode_body(None, b"").unwrap();
        assert_eq!(req, VirtualAccountRequest::default());
    }

    #[test]
    fn test_json_body_decodes() {
        let body = br#"{"virtualAccountNo":"   1234","trxId":"T1"}"#;
        let req: VirtualAccountDeleteRequest =
            decode_body(Some("application/json; charset=utf-8"), body).unwrap();
        assert_eq!(req.virtual_account_no, "   1234");
        assert_eq!(req.trx_id, "T1");
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = decode_body::<VirtualAccountRequest>(Some("application/json"), b"{\"trxId\":")
            .unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err =
            decode_body::<VirtualAccountRequest>(Some("application/json"), b"[1,2,3]").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn test_wrong_media_type_is_rejected() {
        let err =
            decode_body::<VirtualAccountDeleteRequest>(Some("text/plain"), b"{}").unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedMediaType(ref t) if t == "text/plain"));

        let err = decode_body::<VirtualAccountDeleteRequest>(None, b"{}").unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedMediaType(_)));
    }

    #[test]
    fn test_null_body_yields_default() {
        let req: VirtualAccountRequest = decode_body(Some("application/json"), b" null\n").unwrap();
        assert_eq!(req, VirtualAccountRequest::default());

        let err = decode_body::<VirtualAccountRequest>(Some("text/plain"), b"null").unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedMediaType(_)));
    }

    #[test]
    fn test_media_type_is_case_insensitive() {
        let req: VirtualAccountDeleteRequest =
            decode_body(Some("Application/JSON"), br#"{"customerNo":"7"}"#).unwrap();
        assert_eq!(req.customer_no, "7");
    }
}
