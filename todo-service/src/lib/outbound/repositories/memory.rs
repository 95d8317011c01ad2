use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::MutexGuard;

use async_trait::async_trait;

use crate::domain::page::Page;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

#[derive(Default)]
struct Tables {
    last_user_id: i64,
    users: BTreeMap<UserId, User>,
    last_todo_id: i64,
    todos: BTreeMap<TodoId, Todo>,
}

impl Tables {
    fn collides(&self, user: &User) -> bool {
        self.users.values().any(|other| {
            other.id != user.id
                && (other.username == user.username || other.email == user.email)
        })
    }
}

/// Process-local storage for users and todos.
///
/// Every operation runs under one lock, so uniqueness checks and writes are
/// atomic the same way the database constraints are. Deleting a user
/// removes their todos.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, String> {
        self.tables
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_string())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut tables = self.lock().map_err(UserError::DatabaseError)?;

        let user = User {
            id: UserId(tables.last_user_id + 1),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: user.created_at,
            updated_at: user.created_at,
        };
        if tables.collides(&user) {
            return Err(UserError::UsernameOrEmailAlreadyExists);
        }

        tables.last_user_id = user.id.0;
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let tables = self.lock().map_err(UserError::DatabaseError)?;
        Ok(tables.users.get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let tables = self.lock().map_err(UserError::DatabaseError)?;
        Ok(tables
            .users
            .values()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let tables = self.lock().map_err(UserError::DatabaseError)?;
        Ok(tables
            .users
            .values()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }

    async fn list(&self, page: Page) -> Result<Vec<User>, UserError> {
        let tables = self.lock().map_err(UserError::DatabaseError)?;
        Ok(page.slice(tables.users.values().cloned()))
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut tables = self.lock().map_err(UserError::DatabaseError)?;

        if !tables.users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        if tables.collides(&user) {
            return Err(UserError::UsernameOrEmailAlreadyExists);
        }

        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut tables = self.lock().map_err(UserError::DatabaseError)?;

        tables
            .users
            .remove(id)
            .ok_or(UserError::NotFound(id.to_string()))?;
        tables.todos.retain(|_, todo| todo.owner_id != *id);

        Ok(())
    }
}

#[async_trait]
impl TodoRepository for InMemoryStore {
    async fn create(&self, todo: NewTodo) -> Result<Todo, TodoError> {
        let mut tables = self.lock().map_err(TodoError::DatabaseError)?;

        if !tables.users.contains_key(&todo.owner_id) {
            return Err(TodoError::DatabaseError(format!(
                "owner {} does not exist",
                todo.owner_id
            )));
        }

        tables.last_todo_id += 1;
        let todo = Todo {
            id: TodoId(tables.last_todo_id),
            title: todo.title,
            description: todo.description,
            state: todo.state,
            owner_id: todo.owner_id,
            created_at: todo.created_at,
            updated_at: todo.created_at,
        };
        tables.todos.insert(todo.id, todo.clone());

        Ok(todo)
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoError> {
        let tables = self.lock().map_err(TodoError::DatabaseError)?;
        Ok(tables.todos.get(id).cloned())
    }

    async fn list_for_owner(
        &self,
        owner_id: &UserId,
        filter: &TodoFilter,
    ) -> Result<Vec<Todo>, TodoError> {
        let tables = self.lock().map_err(TodoError::DatabaseError)?;
        Ok(filter.page.slice(
            tables
                .todos
                .values()
                .filter(|todo| todo.owner_id == *owner_id && filter.matches(todo))
                .cloned(),
        ))
    }

    async fn update(&self, todo: Todo) -> Result<Todo, TodoError> {
        let mut tables = self.lock().map_err(TodoError::DatabaseError)?;

        match tables.todos.get_mut(&todo.id) {
            Some(stored) => {
                *stored = todo.clone();
                Ok(todo)
            }
            None => Err(TodoError::NotFound(todo.id.to_string())),
        }
    }

    async fn delete(&self, id: &TodoId) -> Result<(), TodoError> {
        let mut tables = self.lock().map_err(TodoError::DatabaseError)?;

        tables
            .todos
            .remove(id)
            .map(|_| ())
            .ok_or(TodoError::NotFound(id.to_string()))
    }
}
