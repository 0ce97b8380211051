//! Required request headers.

use http::HeaderMap;

use crate::error::{Result, ValidationError};

pub const X_TIMESTAMP: &str = "X-TIMESTAMP";
pub const X_SIGNATURE: &str = "X-SIGNATURE";
pub const X_PARTNER_ID: &str = "X-PARTNER-ID";
pub const X_EXTERNAL_ID: &str = "X-EXTERNAL-ID";
pub const CHANNEL_ID: &str = "CHANNEL-ID";

/// Headers every virtual-account request must carry, in the order they are
/// checked. Only presence matters; values are never inspected.
pub const REQUIRED_HEADERS: [&str; 5] =
    [X_TIMESTAMP, X_SIGNATURE, X_PARTNER_ID, X_EXTERNAL_ID, CHANNEL_ID];

/// Return the first required header that is absent or empty.
pub fn first_missing_header(headers: &HeaderMap) -> Option<&'static str> {
    REQUIRED_HEADERS.into_iter().find(|name| {
        headers
            .get(*name)
            .map_or(true, |value| value.as_bytes().is_empty())
    })
}

/// Check all required headers, failing on the first missing one.
pub fn require_headers(headers: &HeaderMap) -> Result<()> {
    match first_missing_header(headers) {
        Some(name) => Err(ValidationError::MissingHeader(name)),
        None => Ok(()),
    }
}
