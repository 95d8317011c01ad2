use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::TodoPublicData;
use crate::domain::page::Page;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoState;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::extractors::CurrentUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_todos(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Query(params): Query<ListTodosParams>,
) -> Result<ApiSuccess<TodoListData>, ApiError> {
    state
        .todo_service
        .list_todos(&actor, params.try_into_filter()?)
        .await
        .map_err(ApiError::from)
        .map(|todos| {
            ApiSuccess::new(
                StatusCode::OK,
                TodoListData {
                    todos: todos.iter().map(TodoPublicData::from).collect(),
                },
            )
        })
}

#[derive(Debug, Default, Deserialize)]
pub struct ListTodosParams {
    offset: Option<i64>,
    limit: Option<i64>,
    title: Option<String>,
    description: Option<String>,
    state: Option<String>,
}

impl ListTodosParams {
    fn try_into_filter(self) -> Result<TodoFilter, TodoError> {
        Ok(TodoFilter {
            page: Page::new(
                self.offset.unwrap_or(0),
                self.limit.unwrap_or(Page::DEFAULT_LIMIT),
            ),
            title: self.title,
            description: self.description,
            state: self.state.as_deref().map(str::parse::<TodoState>).transpose()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoListData {
    pub todos: Vec<TodoPublicData>,
}
