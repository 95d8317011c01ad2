use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::claims::expires_at;
use crate::jwt::Claims;
use crate::jwt::DecodeError;
use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Couples password verification with token minting.
///
/// Holds the process-wide codec and the configured access token lifetime.
pub struct TokenIssuer {
    password_hasher: PasswordHasher,
    codec: TokenCodec,
    access_token_ttl: Duration,
}

/// A freshly minted access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl TokenIssuer {
    /// # Arguments
    /// * `codec` - Codec holding the signing secret and algorithm
    /// * `access_token_ttl` - Lifetime of every token minted by `issue`
    pub fn new(codec: TokenCodec, access_token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            codec,
            access_token_ttl,
        }
    }

    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify `password` against `stored_hash` and, on a match, mint a token
    /// for `subject` issued at `issued_at`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or the hash is unreadable)
    /// * `Token` - Token generation failed
    pub fn issue(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, IssueError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(IssueError::InvalidCredentials);
        }

        let expires_at = expires_at(issued_at, self.access_token_ttl)?;
        let access_token = self
            .codec
            .mint(subject, issued_at, self.access_token_ttl)?;

        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }

    /// Validate and decode an access token at the current time.
    pub fn validate(&self, token: &str) -> Result<Claims, DecodeError> {
        self.codec.decode(token)
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }
}
