use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Todo operations, always on behalf of an authenticated user.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    async fn create_todo(&self, actor: &User, command: CreateTodoCommand)
        -> Result<Todo, TodoError>;

    /// List the actor's own todos.
    async fn list_todos(&self, actor: &User, filter: TodoFilter) -> Result<Vec<Todo>, TodoError>;

    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `Forbidden` - Todo belongs to another user
    async fn update_todo(
        &self,
        actor: &User,
        id: &TodoId,
        command: UpdateTodoCommand,
    ) -> Result<Todo, TodoError>;

    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `Forbidden` - Todo belongs to another user
    async fn delete_todo(&self, actor: &User, id: &TodoId) -> Result<(), TodoError>;
}

#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn create(&self, todo: NewTodo) -> Result<Todo, TodoError>;

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoError>;

    /// Todos owned by `owner_id` matching `filter`, ordered by id.
    async fn list_for_owner(
        &self,
        owner_id: &UserId,
        filter: &TodoFilter,
    ) -> Result<Vec<Todo>, TodoError>;

    /// # Errors
    /// * `NotFound` - Todo does not exist
    async fn update(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// # Errors
    /// * `NotFound` - Todo does not exist
    async fn delete(&self, id: &TodoId) -> Result<(), TodoError>;
}
