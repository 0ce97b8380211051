//! Timestamp handling for virtual-account payloads.
//!
//! Expiry dates arrive as RFC3339 strings and leave as RFC3339 timestamps.
//! An unset timestamp is rendered as the zero instant
//! `0001-01-01T00:00:00Z`, which is what sandbox clients expect to see in
//! error and delete envelopes.

use chrono::{DateTime, Duration, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Rendering of an unset timestamp.
pub const ZERO_TIMESTAMP: &str = "0001-01-01T00:00:00Z";

/// Hours added to the current time when an expiry date cannot be parsed.
pub const DEFAULT_EXPIRY_HOURS: i64 = 24;

/// Parse a strict RFC3339 timestamp.
///
/// Date and time must be joined by an uppercase `T`, and the offset is either
/// an uppercase `Z` or `±hh:mm`. The relaxed forms chrono also accepts (a
/// space or lowercase `t` separator, a lowercase `z`) are rejected.
pub fn parse_rfc3339(raw: &str) -> Option<DateTime<FixedOffset>> {
    let bytes = raw.as_bytes();
    if bytes.get(10) != Some(&b'T') || bytes.last() == Some(&b'z') {
        return None;
    }
    DateTime::parse_from_rfc3339(raw).ok()
}

/// Resolve the `expiredDate` of a create request.
///
/// A valid RFC3339 value keeps its original offset. Anything else (empty,
/// malformed, wrong layout) falls back to `now` plus [`DEFAULT_EXPIRY_HOURS`]
/// and is never reported as an error.
pub fn resolve_expiry(raw: &str, now: DateTime<Utc>) -> DateTime<FixedOffset> {
    parse_rfc3339(raw)
        .unwrap_or_else(|| (now + Duration::hours(DEFAULT_EXPIRY_HOURS)).fixed_offset())
}

/// Format a timestamp the way the sandbox emits it (`Z` for UTC).
pub fn format_rfc3339(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Serde adapter for optional timestamps where `None` is the zero instant.
pub mod rfc3339_or_zero {
    use super::*;

    pub fn serialize<S>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&format_rfc3339(dt)),
            None => serializer.serialize_str(ZERO_TIMESTAMP),
        }
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") | Some(ZERO_TIMESTAMP) => Ok(None),
            Some(s) => match parse_rfc3339(s) {
                Some(dt) => Ok(Some(dt)),
                None => Err(serde::de::Error::custom(format!("invalid timestamp: {s}"))),
            },
        }
    }
}
