//! Business field validation.

use crate::error::{Result, ValidationError};
use crate::model::{VirtualAccountDeleteRequest, VirtualAccountRequest};

/// Validation trait for request types.
///
/// Implementations check that the business fields needed to build a success
/// envelope are present, returning the error whose message is sent back.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for VirtualAccountRequest {
    fn validate(&self) -> Result<()> {
        let required = [
            &self.partner_service_id,
            &self.customer_no,
            &self.virtual_account_no,
            &self.virtual_account_name,
            &self.virtual_account_email,
            &self.trx_id,
            &self.total_amount.value,
            &self.total_amount.currency,
        ];

        if required.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingField);
        }
        Ok(())
    }
}

impl Validate for VirtualAccountDeleteRequest {
    fn validate(&self) -> Result<()> {
        if self.virtual_account_no.is_empty() {
            return Err(ValidationError::MissingNamedField("virtualAccountNo"));
        }
        Ok(())
    }
}
