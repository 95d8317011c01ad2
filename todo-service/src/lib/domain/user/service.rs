use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::guard::authorize;
use crate::domain::auth::guard::Access;
use crate::domain::page::Page;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    fn hash_password(&self, password: &str) -> Result<String, UserError> {
        self.password_hasher
            .hash(password)
            .map_err(|e| UserError::PasswordHashing(e.to_string()))
    }

    fn ensure_owner(actor: &User, id: &UserId) -> Result<(), UserError> {
        match authorize(actor, id) {
            Access::Allowed => Ok(()),
            Access::Denied => {
                tracing::warn!(
                    actor_id = %actor.id,
                    target_id = %id,
                    "User modification denied"
                );
                Err(UserError::Forbidden)
            }
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let new_user = NewUser {
            username: command.username,
            email: command.email,
            password_hash: self.hash_password(&command.password)?,
            created_at: Utc::now(),
        };

        // a concurrent registration can still win the race; storage reports it
        // as UsernameOrEmailAlreadyExists
        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "User created");

        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn list_users(&self, page: Page) -> Result<Vec<User>, UserError> {
        self.repository.list(page).await
    }

    async fn update_user(
        &self,
        actor: &User,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        Self::ensure_owner(actor, id)?;

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(new_username) = command.username {
            user.username = new_username;
        }

        if let Some(new_email) = command.email {
            user.email = new_email;
        }

        if let Some(new_password) = command.password {
            user.password_hash = self.hash_password(&new_password)?;
        }

        user.updated_at = Utc::now();

        let updated_user = self.repository.update(user).await?;
        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, actor: &User, id: &UserId) -> Result<(), UserError> {
        Self::ensure_owner(actor, id)?;

        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
