use thiserror::Error;

/// Main error type for SMS decoding operations
#[derive(Error, Debug)]
pub enum SmsError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for SMS decoding operations
pub type SmsResult<T> = Result<T, SmsError>;
