use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoStateError {
    #[error("Unknown todo state '{0}' (expected draft, todo, doing, done or trash)")]
    Unknown(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Invalid todo id: {0}")]
    InvalidTodoId(String),

    #[error("Invalid state: {0}")]
    InvalidState(#[from] TodoStateError),

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Task not found")]
    NotFound(String),

    #[error("Not enough permissions")]
    Forbidden,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
