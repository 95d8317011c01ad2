use std::collections::HashMap;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;

/// Access token payload.
///
/// `sub` carries the subject the token was minted for and `exp` its absolute
/// expiry as a Unix timestamp. Both are optional at the type level so that a
/// token missing them can still be decoded and rejected by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (the account identifier the token represents)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Any other fields found in the payload
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims for an access token valid from `issued_at` for `ttl`.
    ///
    /// Sub-second remainders round the expiry up to the next whole second.
    ///
    /// # Errors
    /// * `ExpiryOutOfRange` - `issued_at + ttl` is not a representable instant
    pub fn for_subject(
        subject: impl ToString,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, TokenError> {
        let expires_at = expires_at(issued_at, ttl)?;
        let exp = expires_at.timestamp() + i64::from(expires_at.timestamp_subsec_nanos() > 0);

        Ok(Self::new()
            .with_subject(subject)
            .with_issued_at(issued_at.timestamp())
            .with_expiration(exp))
    }

    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }

    /// The subject claim, if present and non-empty.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|sub| !sub.is_empty())
    }

    /// Whether the token is unusable at `current_timestamp`.
    ///
    /// A token stops being valid at the instant of its `exp`, and a token
    /// without `exp` is never considered valid.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(true, |exp| current_timestamp >= exp)
    }
}

/// `issued_at + ttl`, without overflowing the calendar.
pub fn expires_at(issued_at: DateTime<Utc>, ttl: Duration) -> Result<DateTime<Utc>, TokenError> {
    issued_at
        .checked_add_signed(ttl)
        .ok_or_else(|| TokenError::ExpiryOutOfRange(format!("{} + {}", issued_at, ttl)))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new().with_subject("alice@example.com");
        assert_eq!(claims.sub, Some("alice@example.com".to_string()));
        assert!(claims.exp.is_none());
    }

    #[test]
    fn test_for_subject() {
        let issued_at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let claims = Claims::for_subject("alice@example.com", issued_at, Duration::minutes(30)).unwrap();

        assert_eq!(claims.subject(), Some("alice@example.com"));
        assert_eq!(claims.iat, Some(issued_at.timestamp()));
        assert_eq!(claims.exp, Some(issued_at.timestamp() + 30 * 60));
    }

    #[test]
    fn test_for_subject_rounds_subsecond_ttl_up() {
        let issued_at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let claims = Claims::for_subject("a@example.com", issued_at, Duration::milliseconds(10)).unwrap();

        assert_eq!(claims.exp, Some(issued_at.timestamp() + 1));
        assert!(!claims.is_expired(issued_at.timestamp()));
    }

    #[test]
    fn test_for_subject_rejects_unrepresentable_expiry() {
        let issued_at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let ttl = Duration::try_minutes(1_000_000_000_000).unwrap();

        assert!(matches!(
            Claims::for_subject("a@example.com", issued_at, ttl),
            Err(TokenError::ExpiryOutOfRange(_))
        ));
    }

    #[test]
    fn test_builder_pattern() {
        let claims = Claims::new()
            .with_subject("alice@example.com")
            .with_expiration(1234567890)
            .with_issued_at(1234567800)
            .with_extra("scope", "todos");

        assert_eq!(claims.exp, Some(1234567890));
        assert_eq!(claims.iat, Some(1234567800));
        assert_eq!(claims.extra.get("scope").unwrap().as_str(), Some("todos"));
    }

    #[test]
    fn test_empty_subject_is_absent() {
        let claims = Claims::new().with_subject("");
        assert_eq!(claims.subject(), None);
        assert_eq!(Claims::new().subject(), None);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::new().with_expiration(1000);

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // exactly at expiration
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_is_expired_no_exp_claim() {
        assert!(Claims::new().is_expired(0));
    }

    #[test]
    fn test_payload_shape() {
        let claims = Claims::new()
            .with_subject("alice@example.com")
            .with_expiration(1700000000);

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sub": "alice@example.com", "exp": 1700000000})
        );
    }
}
