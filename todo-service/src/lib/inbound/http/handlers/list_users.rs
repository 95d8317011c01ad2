use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserPublicData;
use crate::domain::page::Page;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> Result<ApiSuccess<UserListData>, ApiError> {
    state
        .user_service
        .list_users(params.page())
        .await
        .map_err(ApiError::from)
        .map(|users| {
            ApiSuccess::new(
                StatusCode::OK,
                UserListData {
                    users: users.iter().map(UserPublicData::from).collect(),
                },
            )
        })
}

#[derive(Debug, Default, Deserialize)]
pub struct ListUsersParams {
    offset: Option<i64>,
    limit: Option<i64>,
}

impl ListUsersParams {
    fn page(&self) -> Page {
        Page::new(
            self.offset.unwrap_or(0),
            self.limit.unwrap_or(Page::DEFAULT_LIMIT),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserListData {
    pub users: Vec<UserPublicData>,
}
