//! Authentication utilities library
//!
//! Provides the stateless building blocks of bearer-token authentication:
//! - Password hashing (Argon2id)
//! - Access token minting and verification (HMAC-signed JWT)
//! - Token issuance coordination (verify password, then mint)
//!
//! Nothing here knows about users or storage. The service looks accounts up
//! itself and hands this crate only secrets, digests and subjects.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("my_password", "not-a-hash"));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Algorithm, TokenCodec};
//! use chrono::{Duration, Utc};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Algorithm::HS256).unwrap();
//! let token = codec.mint("alice@example.com", Utc::now(), Duration::minutes(30)).unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.subject(), Some("alice@example.com"));
//! ```
//!
//! ## Login
//! ```
//! use auth::{Algorithm, TokenCodec, TokenIssuer};
//! use chrono::{Duration, Utc};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Algorithm::HS256).unwrap();
//! let issuer = TokenIssuer::new(codec, Duration::minutes(30));
//!
//! // Register: hash password
//! let hash = issuer.hash_password("password123").unwrap();
//!
//! // Login: verify and mint
//! let token = issuer.issue("password123", &hash, "alice@example.com", Utc::now()).unwrap();
//!
//! // Later requests: validate
//! let claims = issuer.validate(&token.access_token).unwrap();
//! assert_eq!(claims.subject(), Some("alice@example.com"));
//! ```

pub mod issuer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use issuer::IssueError;
pub use issuer::IssuedToken;
pub use issuer::TokenIssuer;
pub use jwt::Algorithm;
pub use jwt::Claims;
pub use jwt::DecodeError;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
