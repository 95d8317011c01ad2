mod common;

use chrono::Utc;
use common::TestDb;
use todo_service::domain::page::Page;
use todo_service::domain::todo::errors::TodoError;
use todo_service::domain::todo::models::NewTodo;
use todo_service::domain::todo::models::TodoFilter;
use todo_service::domain::todo::models::TodoState;
use todo_service::domain::todo::ports::TodoRepository;
use todo_service::domain::user::errors::UserError;
use todo_service::domain::user::models::EmailAddress;
use todo_service::domain::user::models::NewUser;
use todo_service::domain::user::models::User;
use todo_service::domain::user::models::UserId;
use todo_service::domain::user::models::Username;
use todo_service::domain::user::ports::UserRepository;
use todo_service::outbound::repositories::PostgresTodoRepository;
use todo_service::outbound::repositories::PostgresUserRepository;

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: Username::new(username.to_string()).unwrap(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        password_hash: "$argon2id$test_hash".to_string(),
        created_at: Utc::now(),
    }
}

fn new_todo(owner: UserId, title: &str, description: Option<&str>, state: TodoState) -> NewTodo {
    NewTodo {
        title: title.to_string(),
        description: description.map(str::to_string),
        state,
        owner_id: owner,
        created_at: Utc::now(),
    }
}

async fn seed_users(users: &PostgresUserRepository, names: &[&str]) -> Vec<User> {
    let mut created = Vec::new();
    for name in names {
        let user = users
            .create(new_user(name, &format!("{}@example.com", name)))
            .await
            .expect("Failed to create user");
        created.push(user);
    }
    created
}

async fn titles(todos: &PostgresTodoRepository, owner: &UserId, filter: TodoFilter) -> Vec<String> {
    todos
        .list_for_owner(owner, &filter)
        .await
        .unwrap()
        .into_iter()
        .map(|todo| todo.title)
        .collect()
}

#[tokio::test]
async fn test_create_duplicate_username_or_email_conflicts() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let users = PostgresUserRepository::new(db.pool.clone());
    users
        .create(new_user("alice", "alice@example.com"))
        .await
        .unwrap();

    let same_name = users.create(new_user("alice", "other@example.com")).await;
    let same_email = users.create(new_user("carol", "alice@example.com")).await;

    assert_eq!(same_name, Err(UserError::UsernameOrEmailAlreadyExists));
    assert_eq!(same_email, Err(UserError::UsernameOrEmailAlreadyExists));
    assert_eq!(users.list(Page::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_into_taken_values_conflicts() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let users = PostgresUserRepository::new(db.pool.clone());
    let created = seed_users(&users, &["alice", "bob"]).await;

    let mut bob = created[1].clone();
    bob.email = EmailAddress::new("alice@example.com".to_string()).unwrap();
    assert_eq!(
        users.update(bob).await,
        Err(UserError::UsernameOrEmailAlreadyExists)
    );

    let mut bob = created[1].clone();
    bob.username = Username::new("alice".to_string()).unwrap();
    assert_eq!(
        users.update(bob).await,
        Err(UserError::UsernameOrEmailAlreadyExists)
    );

    let mut bob = created[1].clone();
    bob.username = Username::new("Bob Builder".to_string()).unwrap();
    let updated = users.update(bob).await.unwrap();
    assert_eq!(updated.username.as_str(), "Bob Builder");
    assert_eq!(
        users
            .find_by_email("bob@example.com")
            .await
            .unwrap()
            .map(|user| user.id),
        Some(created[1].id)
    );
}

#[tokio::test]
async fn test_update_and_delete_missing_user() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let users = PostgresUserRepository::new(db.pool.clone());
    let mut ghost = seed_users(&users, &["ghost"]).await.remove(0);
    users.delete(&ghost.id).await.unwrap();

    ghost.password_hash = "$argon2id$other".to_string();
    assert!(matches!(
        users.update(ghost.clone()).await,
        Err(UserError::NotFound(_))
    ));
    assert!(matches!(
        users.delete(&ghost.id).await,
        Err(UserError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_users_pages_in_id_order() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let users = PostgresUserRepository::new(db.pool.clone());
    seed_users(&users, &["alice", "bob", "carol", "dave"]).await;

    let page = users.list(Page::new(1, 2)).await.unwrap();
    let names: Vec<&str> = page.iter().map(|user| user.username.as_str()).collect();
    assert_eq!(names, vec!["bob", "carol"]);

    assert!(users.list(Page::new(10, 5)).await.unwrap().is_empty());
    assert!(users.list(Page::new(0, 0)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_todo_filters_match_literal_substrings() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let users = PostgresUserRepository::new(db.pool.clone());
    let todos = PostgresTodoRepository::new(db.pool.clone());
    let created = seed_users(&users, &["alice", "bob"]).await;
    let (alice, bob) = (created[0].id, created[1].id);

    todos
        .create(new_todo(alice, "Buy milk", Some("Two LITRES"), TodoState::Todo))
        .await
        .unwrap();
    todos
        .create(new_todo(alice, "Raise 5% savings", None, TodoState::Doing))
        .await
        .unwrap();
    todos
        .create(new_todo(alice, "snake_case rename", Some("50% done"), TodoState::Draft))
        .await
        .unwrap();
    todos
        .create(new_todo(bob, "Buy milk", None, TodoState::Todo))
        .await
        .unwrap();

    let by_title = |title: &str| TodoFilter {
        title: Some(title.to_string()),
        ..Default::default()
    };
    assert_eq!(titles(&todos, &alice, by_title("MILK")).await, vec!["Buy milk"]);
    assert_eq!(titles(&todos, &alice, by_title("%")).await, vec!["Raise 5% savings"]);
    assert_eq!(titles(&todos, &alice, by_title("_")).await, vec!["snake_case rename"]);
    assert!(titles(&todos, &alice, by_title("\\")).await.is_empty());

    let by_description = TodoFilter {
        description: Some("litres".to_string()),
        ..Default::default()
    };
    assert_eq!(titles(&todos, &alice, by_description).await, vec!["Buy milk"]);

    let by_description = TodoFilter {
        description: Some("%".to_string()),
        ..Default::default()
    };
    assert_eq!(titles(&todos, &alice, by_description).await, vec!["snake_case rename"]);

    let by_state = TodoFilter {
        state: Some(TodoState::Doing),
        ..Default::default()
    };
    assert_eq!(titles(&todos, &alice, by_state).await, vec!["Raise 5% savings"]);

    let paged = TodoFilter {
        page: Page::new(1, 1),
        ..Default::default()
    };
    assert_eq!(titles(&todos, &alice, paged).await, vec!["Raise 5% savings"]);
}

#[tokio::test]
async fn test_todo_update_and_delete() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let users = PostgresUserRepository::new(db.pool.clone());
    let todos = PostgresTodoRepository::new(db.pool.clone());
    let owner = seed_users(&users, &["alice"]).await.remove(0);

    let mut todo = todos
        .create(new_todo(owner.id, "Buy milk", Some("two litres"), TodoState::Todo))
        .await
        .unwrap();

    todo.description = None;
    todo.state = TodoState::Done;
    let updated = todos.update(todo.clone()).await.unwrap();
    assert_eq!(updated.description, None);
    assert_eq!(updated.state, TodoState::Done);

    todos.delete(&todo.id).await.unwrap();
    assert_eq!(todos.find_by_id(&todo.id).await, Ok(None));
    assert_eq!(
        todos.delete(&todo.id).await,
        Err(TodoError::NotFound(todo.id.to_string()))
    );
    assert!(matches!(
        todos.update(todo).await,
        Err(TodoError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_deleting_user_removes_their_todos() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let users = PostgresUserRepository::new(db.pool.clone());
    let todos = PostgresTodoRepository::new(db.pool.clone());
    let owner = seed_users(&users, &["alice"]).await.remove(0);
    let todo = todos
        .create(new_todo(owner.id, "Buy milk", None, TodoState::Todo))
        .await
        .unwrap();

    users.delete(&owner.id).await.unwrap();

    assert_eq!(todos.find_by_id(&todo.id).await, Ok(None));
}
