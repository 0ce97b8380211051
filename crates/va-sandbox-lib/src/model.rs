//! Request and response payloads for the virtual-account endpoints.
//!
//! Every payload uses camelCase keys. Request decoding is lenient in the same
//! way the upstream API is: missing keys and explicit `null` values decode to
//! the zero value, and unknown keys are ignored.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::timestamp::rfc3339_or_zero;

/// Decode `null` as the type's default instead of failing.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Monetary amount as a decimal string plus ISO 4217 currency code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amount {
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
}

impl Amount {
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: currency.into(),
        }
    }
}

/// Amount actually paid against a virtual account.
pub type PaidAmount = Amount;

/// Bilingual label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Description {
    #[serde(deserialize_with = "null_as_default")]
    pub english: String,
    #[serde(deserialize_with = "null_as_default")]
    pub indonesia: String,
}

impl Description {
    pub fn new(english: impl Into<String>, indonesia: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            indonesia: indonesia.into(),
        }
    }
}

/// One line of the bill attached to a virtual account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub bill_description: Description,
}

/// Free-form metadata attached to a virtual account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalInfo {
    /// Internal tracking identifier, omitted from output when empty.
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub insert_id: String,
}

/// Body of `POST /v1.0/transfer-va/create-va`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VirtualAccountRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub partner_service_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub virtual_account_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub virtual_account_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub virtual_account_email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trx_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_amount: Amount,
    /// `None` when the client omitted the list or sent `null`.
    pub bill_details: Option<Vec<BillDetail>>,
    /// Expected to be RFC3339; see [`crate::resolve_expiry`].
    #[serde(deserialize_with = "null_as_default")]
    pub expired_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_info: AdditionalInfo,
}

/// Body of `DELETE /v1.0/transfer-va/delete-va`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VirtualAccountDeleteRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub partner_service_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub virtual_account_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trx_id: String,
}

/// Envelope returned by the create and delete endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualAccountResponse {
    pub response_code: String,
    pub response_message: String,
    pub virtual_account_data: VirtualAccountData,
}

/// Virtual account as echoed back to the caller.
///
/// The zero value is what error and delete envelopes carry for every field
/// they do not populate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualAccountData {
    pub partner_service_id: String,
    pub customer_no: String,
    pub virtual_account_no: String,
    pub virtual_account_name: String,
    pub virtual_account_email: String,
    pub trx_id: String,
    pub total_amount: Amount,
    pub bill_details: Option<Vec<BillDetail>>,
    #[serde(with = "rfc3339_or_zero")]
    pub expired_date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub additional_info: AdditionalInfo,
}
