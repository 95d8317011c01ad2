use std::sync::Arc;

use async_trait::async_trait;
use auth::IssueError;
use auth::TokenIssuer;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::bearer_token;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::user::ports::UserRepository;

/// Login flow and bearer authentication over the user directory.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    issuer: Arc<TokenIssuer>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// # Arguments
    /// * `repository` - User lookup
    /// * `issuer` - Token issuer built from the process configuration
    pub fn new(repository: Arc<UR>, issuer: Arc<TokenIssuer>) -> Self {
        Self { repository, issuer }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, AuthError> {
        let user = self
            .repository
            .find_by_email(&credentials.identifier)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or_else(|| {
                tracing::warn!(reason = "unknown identifier", "Login rejected");
                AuthError::InvalidCredentials
            })?;

        let issued = self
            .issuer
            .issue(
                &credentials.secret,
                &user.password_hash,
                user.email.as_str(),
                Utc::now(),
            )
            .map_err(|e| match e {
                IssueError::InvalidCredentials => {
                    tracing::warn!(user_id = %user.id, reason = "password mismatch", "Login rejected");
                    AuthError::InvalidCredentials
                }
                IssueError::Token(err) => AuthError::Internal(err.to_string()),
            })?;

        tracing::info!(user_id = %user.id, expires_at = %issued.expires_at, "Access token issued");

        Ok(AccessToken::bearer(issued.access_token, issued.expires_at))
    }

    async fn authenticate(&self, authorization: Option<&str>) -> Result<User, AuthError> {
        let token = authorization.and_then(bearer_token).ok_or_else(|| {
            tracing::warn!(reason = "missing or malformed bearer header", "Authentication rejected");
            AuthError::Malformed
        })?;

        let claims = self.issuer.validate(token).map_err(|e| {
            tracing::warn!(reason = %e, "Authentication rejected");
            AuthError::InvalidCredentials
        })?;

        let subject = claims.subject().ok_or_else(|| {
            tracing::warn!(reason = "token has no subject", "Authentication rejected");
            AuthError::InvalidCredentials
        })?;

        self.repository
            .find_by_email(subject)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or_else(|| {
                tracing::warn!(reason = "subject does not resolve to a user", "Authentication rejected");
                AuthError::InvalidCredentials
            })
    }
}
