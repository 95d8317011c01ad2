use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::page::Page;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::errors::TodoStateError;
use crate::domain::user::models::UserId;

/// A todo item. Every todo belongs to exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub state: TodoState,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub state: TodoState,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(pub i64);

impl TodoId {
    pub fn from_string(s: &str) -> Result<Self, TodoError> {
        s.parse::<i64>()
            .map(TodoId)
            .map_err(|e| TodoError::InvalidTodoId(format!("{}: {}", s, e)))
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TodoState {
    Draft,
    #[default]
    Todo,
    Doing,
    Done,
    Trash,
}

impl TodoState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoState::Draft => "draft",
            TodoState::Todo => "todo",
            TodoState::Doing => "doing",
            TodoState::Done => "done",
            TodoState::Trash => "trash",
        }
    }
}

impl FromStr for TodoState {
    type Err = TodoStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(TodoState::Draft),
            "todo" => Ok(TodoState::Todo),
            "doing" => Ok(TodoState::Doing),
            "done" => Ok(TodoState::Done),
            "trash" => Ok(TodoState::Trash),
            other => Err(TodoStateError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for TodoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct CreateTodoCommand {
    pub title: String,
    pub description: Option<String>,
    pub state: TodoState,
}

impl CreateTodoCommand {
    /// # Errors
    /// * `EmptyTitle` - `title` is blank
    pub fn new(
        title: String,
        description: Option<String>,
        state: TodoState,
    ) -> Result<Self, TodoError> {
        if title.trim().is_empty() {
            return Err(TodoError::EmptyTitle);
        }

        Ok(Self {
            title,
            description,
            state,
        })
    }
}

/// Partial update; only provided fields change.
///
/// `description: Some(None)` clears the description.
#[derive(Debug, Default)]
pub struct UpdateTodoCommand {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub state: Option<TodoState>,
}

/// Listing criteria. Text filters are case-insensitive substring matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFilter {
    pub page: Page,
    pub title: Option<String>,
    pub description: Option<String>,
    pub state: Option<TodoState>,
}

impl TodoFilter {
    pub fn matches(&self, todo: &Todo) -> bool {
        fn contains(haystack: &str, needle: &str) -> bool {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }

        self.title
            .as_deref()
            .map_or(true, |title| contains(&todo.title, title))
            && self.description.as_deref().map_or(true, |description| {
                todo.description
                    .as_deref()
                    .is_some_and(|own| contains(own, description))
            })
            && self.state.map_or(true, |state| todo.state == state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(title: &str, description: Option<&str>, state: TodoState) -> Todo {
        Todo {
            id: TodoId(1),
            title: title.to_string(),
            description: description.map(str::to_string),
            state,
            owner_id: UserId(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_state_round_trips_through_text() {
        for state in [
            TodoState::Draft,
            TodoState::Todo,
            TodoState::Doing,
            TodoState::Done,
            TodoState::Trash,
        ] {
            assert_eq!(state.as_str().parse::<TodoState>(), Ok(state));
        }
        assert!("later".parse::<TodoState>().is_err());
    }

    #[test]
    fn test_default_state_is_todo() {
        assert_eq!(TodoState::default(), TodoState::Todo);
    }

    #[test]
    fn test_blank_title_rejected() {
        assert_eq!(
            CreateTodoCommand::new("  ".to_string(), None, TodoState::Todo).unwrap_err(),
            TodoError::EmptyTitle
        );
    }

    #[test]
    fn test_filter_matches() {
        let item = todo("Buy milk", Some("two litres"), TodoState::Doing);

        assert!(TodoFilter::default().matches(&item));
        assert!(TodoFilter {
            title: Some("milk".to_string()),
            ..Default::default()
        }
        .matches(&item));
        assert!(TodoFilter {
            description: Some("LITRES".to_string()),
            state: Some(TodoState::Doing),
            ..Default::default()
        }
        .matches(&item));
        assert!(!TodoFilter {
            state: Some(TodoState::Done),
            ..Default::default()
        }
        .matches(&item));
        assert!(!TodoFilter {
            description: Some("litres".to_string()),
            ..Default::default()
        }
        .matches(&todo("Buy milk", None, TodoState::Doing)));
    }
}
