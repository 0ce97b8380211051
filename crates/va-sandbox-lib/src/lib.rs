//! Virtual-account sandbox domain library.
//!
//! Framework-independent pieces of the sandbox API:
//!
//! - [`headers`]: required header presence check
//! - [`decode_body`]: raw body to typed request
//! - [`Validate`]: required business fields
//! - [`accept`]: the three checks above, in order
//! - [`resolve_expiry`]: `expiredDate` parsing with a silent 24 hour fallback
//! - [`VirtualAccountResponse`] / [`StatusVaResponse`]: response envelopes
//!
//! Each request runs through the same linear pipeline and stops at the first
//! failing step:
//!
//! ```text
//! headers ─▶ decode ─▶ validate ─▶ envelope
//!    │          │          │
//!    └──────────┴──────────┴──▶ ValidationError ─▶ 400 / 5002700
//! ```

pub mod decode;
pub mod envelope;
pub mod error;
pub mod headers;
pub mod model;
pub mod pipeline;
pub mod status;
pub mod timestamp;
pub mod validate;

pub use decode::decode_body;
pub use envelope::{
    CODE_BAD_REQUEST, CODE_CREATE_SUCCESS, CODE_DELETE_SUCCESS, CODE_STATUS_SUCCESS,
};
pub use error::{DecodeError, Result, ValidationError};
pub use headers::{require_headers, REQUIRED_HEADERS};
pub use model::{
    AdditionalInfo, Amount, BillDetail, Description, PaidAmount, VirtualAccountData,
    VirtualAccountDeleteRequest, VirtualAccountRequest, VirtualAccountResponse,
};
pub use pipeline::accept;
pub use status::{StatusVaAdditionalInfo, StatusVaData, StatusVaResponse};
pub use timestamp::{parse_rfc3339, resolve_expiry};
pub use validate::Validate;
