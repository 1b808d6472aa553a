use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::users::models::{NewUser, User};

/// Storage for registered users.
///
/// Implementations must enforce email uniqueness themselves and report a
/// violation from `create` as `AppError::UserExists`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Persist a new user and return it with its assigned id
    async fn create(&self, user: NewUser) -> Result<User>;
}
