use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    description: Option<String>,
    state: String,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TodoRow> for Todo {
    type Error = TodoError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        Ok(Todo {
            id: TodoId(row.id),
            title: row.title,
            description: row.description,
            state: row.state.parse()?,
            owner_id: UserId(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> TodoError {
    TodoError::DatabaseError(e.to_string())
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn create(&self, todo: NewTodo) -> Result<Todo, TodoError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (title, description, state, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, title, description, state, user_id, created_at, updated_at
            "#,
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.state.as_str())
        .bind(todo.owner_id.0)
        .bind(todo.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoError> {
        sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, state, user_id, created_at, updated_at
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Todo::try_from)
        .transpose()
    }

    async fn list_for_owner(
        &self,
        owner_id: &UserId,
        filter: &TodoFilter,
    ) -> Result<Vec<Todo>, TodoError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, state, user_id, created_at, updated_at
            FROM todos
            WHERE user_id = $1
              AND ($2::TEXT IS NULL OR strpos(lower(title), lower($2)) > 0)
              AND ($3::TEXT IS NULL OR strpos(lower(description), lower($3)) > 0)
              AND ($4::TEXT IS NULL OR state = $4)
            ORDER BY id
            OFFSET $5
            LIMIT $6
            "#,
        )
        .bind(owner_id.0)
        .bind(&filter.title)
        .bind(&filter.description)
        .bind(filter.state.map(|state| state.as_str()))
        .bind(filter.page.offset)
        .bind(filter.page.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Todo::try_from).collect()
    }

    async fn update(&self, todo: Todo) -> Result<Todo, TodoError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos
            SET title = $2, description = $3, state = $4, updated_at = $5
            WHERE id = $1
            RETURNING id, title, description, state, user_id, created_at, updated_at
            "#,
        )
        .bind(todo.id.0)
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.state.as_str())
        .bind(todo.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(TodoError::NotFound(todo.id.to_string()))?;

        row.try_into()
    }

    async fn delete(&self, id: &TodoId) -> Result<(), TodoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
