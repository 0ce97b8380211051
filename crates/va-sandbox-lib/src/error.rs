use thiserror::Error;

/// Convenient result alias for request validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reasons a request is rejected before a success envelope is built.
///
/// The `Display` text of each variant is sent back verbatim as the
/// `responseMessage` of the error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required header was absent or empty.
    #[error("Missing required header: {0}")]
    MissingHeader(&'static str),

    /// The body could not be decoded into the expected request shape.
    #[error("Invalid JSON format")]
    InvalidJson,

    /// One of the create-path business fields was empty.
    #[error("Missing required field in request body")]
    MissingField,

    /// A specific business field was empty.
    #[error("Missing required field: {0}")]
    MissingNamedField(&'static str),
}

impl ValidationError {
    /// Short label used for metric and log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingHeader(_) => "missing_header",
            Self::InvalidJson => "invalid_json",
            Self::MissingField | Self::MissingNamedField(_) => "missing_field",
        }
    }
}

/// Failure to turn a raw request body into a typed request.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body was sent with a media type other than JSON.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The body was not well-formed JSON or did not match the request shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<DecodeError> for ValidationError {
    fn from(_: DecodeError) -> Self {
        ValidationError::InvalidJson
    }
}
