//! Response envelopes for the create and delete endpoints.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::model::{
    VirtualAccountData, VirtualAccountDeleteRequest, VirtualAccountRequest, VirtualAccountResponse,
};
use crate::timestamp::resolve_expiry;

/// Response code for any rejected request.
pub const CODE_BAD_REQUEST: &str = "5002700";

/// Response code for a created virtual account.
pub const CODE_CREATE_SUCCESS: &str = "2002700";

/// Response code for a deleted virtual account.
pub const CODE_DELETE_SUCCESS: &str = "2003100";

/// Response code for a status inquiry.
pub const CODE_STATUS_SUCCESS: &str = "2002600";

pub const MESSAGE_SUCCESSFUL: &str = "Successful";
pub const MESSAGE_SUCCESS: &str = "Success";

impl VirtualAccountResponse {
    /// Error envelope carrying the validation message and zero-valued data.
    pub fn rejected(error: &ValidationError) -> Self {
        Self {
            response_code: CODE_BAD_REQUEST.to_string(),
            response_message: error.to_string(),
            virtual_account_data: VirtualAccountData::default(),
        }
    }

    /// Success envelope echoing a create request.
    ///
    /// `now` is only consulted when the request's `expiredDate` does not parse.
    pub fn created(request: VirtualAccountRequest, now: DateTime<Utc>) -> Self {
        let expired_date = resolve_expiry(&request.expired_date, now);

        Self {
            response_code: CODE_CREATE_SUCCESS.to_string(),
            response_message: MESSAGE_SUCCESSFUL.to_string(),
            virtual_account_data: VirtualAccountData {
                partner_service_id: request.partner_service_id,
                customer_no: request.customer_no,
                virtual_account_no: request.virtual_account_no,
                virtual_account_name: request.virtual_account_name,
                virtual_account_email: request.virtual_account_email,
                trx_id: request.trx_id,
                total_amount: request.total_amount,
                bill_details: request.bill_details,
                expired_date: Some(expired_date),
                additional_info: request.additional_info,
            },
        }
    }

    /// Success envelope for a delete request; only the identifiers are echoed.
    pub fn deleted(request: VirtualAccountDeleteRequest) -> Self {
        Self {
            response_code: CODE_DELETE_SUCCESS.to_string(),
            response_message: MESSAGE_SUCCESS.to_string(),
            virtual_account_data: VirtualAccountData {
                partner_service_id: request.partner_service_id,
                customer_no: request.customer_no,
                virtual_account_no: request.virtual_account_no,
                trx_id: request.trx_id,
                ..Default::default()
            },
        }
    }
}
