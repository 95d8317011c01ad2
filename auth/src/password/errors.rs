use thiserror::Error;

/// Error type for password hashing.
///
/// Verification has no error path: a digest that does not parse simply does
/// not match.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
