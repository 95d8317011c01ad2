use std::str::FromStr;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Serialize;

use super::claims::Claims;
use super::errors::DecodeError;
use super::errors::TokenError;

/// Signs and verifies access tokens with a symmetric secret.
///
/// The algorithm is fixed at construction and must be one of the HMAC family.
/// Expiry is enforced here, so any payload returned by `decode` was valid at
/// the moment it was decoded.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
}

impl TokenCodec {
    /// Create a codec for `secret` signing with `algorithm`.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - `algorithm` is not HS256, HS384 or HS512
    ///
    /// # Security Notes
    /// - The secret should be at least as long as the HMAC output (32 bytes for HS256)
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Result<Self, TokenError> {
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(TokenError::UnsupportedAlgorithm(format!("{:?}", algorithm)));
        }

        // exp must be present; its value is checked in `decode_at` against the
        // caller's clock with no leeway
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            validation,
        })
    }

    /// Create a codec from an algorithm name such as `"HS256"`.
    pub fn from_algorithm_name(secret: &[u8], algorithm: &str) -> Result<Self, TokenError> {
        let algorithm = Algorithm::from_str(algorithm)
            .map_err(|_| TokenError::UnsupportedAlgorithm(algorithm.to_string()))?;
        Self::new(secret, algorithm)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Mint an access token for `subject`, expiring `ttl` after `issued_at`.
    ///
    /// # Errors
    /// * `ExpiryOutOfRange` - The expiry would overflow the calendar
    /// * `EncodingFailed` - Signing failed
    pub fn mint(
        &self,
        subject: &str,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.encode(&Claims::for_subject(subject, issued_at, ttl)?)
    }

    /// Sign an arbitrary payload.
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify and decode a token at the current time.
    pub fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
        self.decode_at(token, Utc::now())
    }

    /// Verify and decode a token as of `now`.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not verify under this codec's secret and algorithm
    /// * `Expired` - `now` is at or past the token's `exp`
    /// * `Malformed` - Anything else: bad encoding, bad JSON, missing `exp`
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, DecodeError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        DecodeError::InvalidSignature
                    }
                    ErrorKind::ExpiredSignature => DecodeError::Expired,
                    _ => DecodeError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired(now.timestamp()) {
            return Err(DecodeError::Expired);
        }

        Ok(claims)
    }
}
