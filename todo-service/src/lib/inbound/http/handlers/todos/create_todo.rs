use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::TodoPublicData;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::TodoState;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::extractors::CurrentUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_todo(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Json(body): Json<CreateTodoRequest>,
) -> Result<ApiSuccess<TodoPublicData>, ApiError> {
    state
        .todo_service
        .create_todo(&actor, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref todo| ApiSuccess::new(StatusCode::CREATED, todo.into()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    title: String,
    description: Option<String>,
    state: Option<String>,
}

impl CreateTodoRequest {
    fn try_into_command(self) -> Result<CreateTodoCommand, TodoError> {
        let state = self
            .state
            .as_deref()
            .map(str::parse::<TodoState>)
            .transpose()?
            .unwrap_or_default();

        CreateTodoCommand::new(self.title, self.description, state)
    }
}
