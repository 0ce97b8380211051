//! The shared accept path for virtual-account requests.

use http::{header::CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;

use crate::decode::decode_body;
use crate::error::Result;
use crate::headers::require_headers;
use crate::validate::Validate;

/// Run header, decode and field checks in order, stopping at the first
/// failure.
pub fn accept<T>(headers: &HeaderMap, body: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default + Validate,
{
    require_headers(headers)?;

    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let request: T = decode_body(content_type, body)?;

    request.validate()?;
    Ok(request)
}
