use thiserror::Error;

/// Authentication failures as seen by callers.
///
/// Expired, forged and unreadable tokens, unknown subjects and wrong
/// passwords all collapse into `InvalidCredentials`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The Authorization header is missing or is not a bearer credential.
    #[error("Could not validate credentials")]
    Malformed,

    #[error("Could not validate credentials")]
    InvalidCredentials,

    #[error("Authentication failed: {0}")]
    Internal(String),
}
