use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::guard::authorize;
use crate::domain::auth::guard::Access;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::models::User;

pub struct TodoService<TR>
where
    TR: TodoRepository,
{
    repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }

    /// Load a todo the actor is allowed to modify.
    async fn owned_todo(&self, actor: &User, id: &TodoId) -> Result<Todo, TodoError> {
        let todo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound(id.to_string()))?;

        match authorize(actor, &todo.owner_id) {
            Access::Allowed => Ok(todo),
            Access::Denied => {
                tracing::warn!(actor_id = %actor.id, todo_id = %id, "Todo modification denied");
                Err(TodoError::Forbidden)
            }
        }
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository,
{
    async fn create_todo(
        &self,
        actor: &User,
        command: CreateTodoCommand,
    ) -> Result<Todo, TodoError> {
        let todo = self
            .repository
            .create(NewTodo {
                title: command.title,
                description: command.description,
                state: command.state,
                owner_id: actor.id,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(todo_id = %todo.id, owner_id = %actor.id, "Todo created");
        Ok(todo)
    }

    async fn list_todos(&self, actor: &User, filter: TodoFilter) -> Result<Vec<Todo>, TodoError> {
        self.repository.list_for_owner(&actor.id, &filter).await
    }

    async fn update_todo(
        &self,
        actor: &User,
        id: &TodoId,
        command: UpdateTodoCommand,
    ) -> Result<Todo, TodoError> {
        let mut todo = self.owned_todo(actor, id).await?;

        if let Some(title) = command.title {
            if title.trim().is_empty() {
                return Err(TodoError::EmptyTitle);
            }
            todo.title = title;
        }

        if let Some(description) = command.description {
            todo.description = description;
        }

        if let Some(state) = command.state {
            todo.state = state;
        }

        todo.updated_at = Utc::now();

        self.repository.update(todo).await
    }

    async fn delete_todo(&self, actor: &User, id: &TodoId) -> Result<(), TodoError> {
        self.owned_todo(actor, id).await?;

        self.repository.delete(id).await?;
        tracing::info!(todo_id = %id, owner_id = %actor.id, "Todo deleted");

        Ok(())
    }
}
