use thiserror::Error;

/// Why a presented token was rejected.
///
/// Callers that face end users should not forward the distinction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Token is expired")]
    Expired,

    #[error("Token signature does not verify")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}

/// Errors raised while building or signing tokens.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Token expiry out of range: {0}")]
    ExpiryOutOfRange(String),
}
