//! Status inquiry payloads.
//!
//! The sandbox answers every inquiry with the same paid virtual account, so
//! the payload is a fixed literal rather than anything derived from the
//! request.

use serde::{Deserialize, Serialize};

use crate::envelope::{CODE_STATUS_SUCCESS, MESSAGE_SUCCESSFUL};
use crate::model::{Amount, BillDetail, Description, PaidAmount};

/// Envelope returned by `POST /v1.0/transfer-va/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusVaResponse {
    pub response_code: String,
    pub response_message: String,
    pub virtual_account_data: StatusVaData,
}

/// Payment state of a single virtual account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusVaData {
    pub payment_flag_reason: Description,
    pub partner_service_id: String,
    pub customer_no: String,
    pub virtual_account_no: String,
    pub virtual_account_name: String,
    pub inquiry_request_id: String,
    pub payment_request_id: String,
    pub trx_id: String,
    pub paid_amount: PaidAmount,
    pub total_amount: Amount,
    pub trx_date_time: String,
    pub transaction_date: String,
    pub reference_no: String,
    pub payment_flag_status: String,
    pub bill_details: Vec<BillDetail>,
    pub additional_info: StatusVaAdditionalInfo,
}

/// Transaction status metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusVaAdditionalInfo {
    /// `"03"` means the bill has been paid.
    pub trx_status: String,
    pub trx_message: String,
}

impl StatusVaResponse {
    /// The canned inquiry answer.
    pub fn sandbox() -> Self {
        Self {
            response_code: CODE_STATUS_SUCCESS.to_string(),
            response_message: MESSAGE_SUCCESSFUL.to_string(),
            virtual_account_data: StatusVaData {
                payment_flag_reason: Description::new("Success", "Sukses"),
                partner_service_id: "74210".to_string(),
                customer_no: "00587616".to_string(),
                virtual_account_no: "7421000587616".to_string(),
                virtual_account_name: "Sandbox Customer".to_string(),
                inquiry_request_id: "INQ-20240115-0001".to_string(),
                payment_request_id: "PAY-20240115-0001".to_string(),
                trx_id: "TRX-20240115-0001".to_string(),
                paid_amount: PaidAmount::new("150000.00", "IDR"),
                total_amount: Amount::new("150000.00", "IDR"),
                trx_date_time: "2024-01-15T10:30:00+07:00".to_string(),
                transaction_date: "2024-01-15T10:30:00+07:00".to_string(),
                reference_no: "REF7421000587616".to_string(),
                payment_flag_status: "00".to_string(),
                bill_details: vec![BillDetail {
                    bill_description: Description::new("Bill Payment", "Pembayaran Tagihan"),
                }],
                additional_info: StatusVaAdditionalInfo {
                    trx_status: "03".to_string(),
                    trx_message: "Paid".to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_literal() {
        let resp = StatusVaResponse::sandbox();
        assert_eq!(resp.response_code, "2002600");
        assert_eq!(resp.response_message, "Successful");
        assert_eq!(resp.virtual_account_data.virtual_account_no, "7421000587616");
        assert_eq!(resp.virtual_account_data.additional_info.trx_status, "03");
    }

    #[test]
    fn test_va_number_is_partner_plus_customer() {
        let data = StatusVaResponse::sandbox().virtual_account_data;
        assert_eq!(
            format!("{}{}", data.partner_service_id, data.customer_no),
            data.virtual_account_no
        );
    }

    #[test]
    fn test_sandbox_is_stable() {
        let a = serde_json::to_vec(&StatusVaResponse::sandbox()).unwrap();
        let b = serde_json::to_vec(&StatusVaResponse::sandbox()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialized_keys() {
        let value = serde_json::to_value(StatusVaResponse::sandbox()).unwrap();
        let data = &value["virtualAccountData"];
        assert_eq!(data["paidAmount"]["currency"], "IDR");
        assert_eq!(data["additionalInfo"]["trxStatus"], "03");
        assert_eq!(data["additionalInfo"]["trxMessage"], "Paid");
        assert_eq!(data["paymentFlagReason"]["indonesia"], "Sukses");
        assert!(data["referenceNo"].is_string());
    }
}
