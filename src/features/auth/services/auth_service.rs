use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::dtos::UserProfileDto;
use crate::features::users::repositories::UserRepository;
use std::sync::Arc;

/// Service for resolving the authenticated caller
pub struct AuthService {
    repository: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Load the profile of the token's user
    pub async fn get_current_user(&self, user: AuthenticatedUser) -> Result<UserProfileDto> {
        self.repository
            .find_by_id(user.user_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
