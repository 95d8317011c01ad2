use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// OAuth2 password-grant style login. The `username` field carries the email.
pub async fn issue_token(
    State(state): State<AppState>,
    Form(form): Form<TokenRequestForm>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    state
        .auth_service
        .login(form.into())
        .await
        .map_err(ApiError::from)
        .map(|ref token| ApiSuccess::new(StatusCode::OK, token.into()))
}

#[derive(Deserialize)]
pub struct TokenRequestForm {
    username: String,
    password: String,
}

impl From<TokenRequestForm> for Credentials {
    fn from(form: TokenRequestForm) -> Self {
        Credentials {
            identifier: form.username,
            secret: form.password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}

impl From<&AccessToken> for TokenResponseData {
    fn from(token: &AccessToken) -> Self {
        Self {
            access_token: token.access_token.clone(),
            token_type: token.token_type.to_string(),
        }
    }
}
