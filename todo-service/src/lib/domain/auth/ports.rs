use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::Credentials;
use crate::domain::user::models::User;

/// Port for establishing who is calling.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange an email and password for an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Internal` - Storage or signing failed
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, AuthError>;

    /// Resolve the raw `Authorization` header value to a user.
    ///
    /// # Errors
    /// * `Malformed` - Header absent or not a bearer credential
    /// * `InvalidCredentials` - Token rejected, no subject, or subject unknown
    /// * `Internal` - Storage failed
    async fn authenticate(&self, authorization: Option<&str>) -> Result<User, AuthError>;
}
