use async_trait::async_trait;

use crate::domain::page::Page;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user. No authentication is required.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken (checked first)
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `UsernameOrEmailAlreadyExists` - Storage rejected the insert as a duplicate
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// List users ordered by id.
    async fn list_users(&self, page: Page) -> Result<Vec<User>, UserError>;

    /// Update `id` on behalf of `actor`.
    ///
    /// # Errors
    /// * `Forbidden` - `actor` is not the target user (checked before any lookup)
    /// * `NotFound` - User does not exist
    /// * `UsernameOrEmailAlreadyExists` - New username or email collides with another user
    /// * `DatabaseError` - Database operation failed
    async fn update_user(
        &self,
        actor: &User,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError>;

    /// Delete `id` on behalf of `actor`.
    ///
    /// # Errors
    /// * `Forbidden` - `actor` is not the target user
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, actor: &User, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
///
/// Each call is its own transaction. Writes that would duplicate a username
/// or email fail with `UsernameOrEmailAlreadyExists`.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user, assigning its id.
    ///
    /// # Errors
    /// * `UsernameOrEmailAlreadyExists` - Unique constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// Takes a raw string since token subjects and login identifiers are not
    /// validated addresses.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve a page of users ordered by id.
    async fn list(&self, page: Page) -> Result<Vec<User>, UserError>;

    /// Update existing user in storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `UsernameOrEmailAlreadyExists` - Unique constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
