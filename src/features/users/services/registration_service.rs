use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::services::TokenService;
use crate::features::users::dtos::{RegisterRequestDto, TokenResponseDto};
use crate::features::users::models::NewUser;
use crate::features::users::repositories::UserRepository;
use crate::features::users::services::PasswordHasher;
use crate::modules::gravatar::Gravatar;

/// Service for registering users
pub struct RegistrationService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<TokenService>,
    gravatar: Gravatar,
}

impl RegistrationService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<TokenService>,
        gravatar: Gravatar,
    ) -> Self {
        Self {
            repository,
            hasher,
            token_service,
            gravatar,
        }
    }

    /// Register a new user and issue their session token.
    ///
    /// Expects an already validated request. Nothing is written unless every
    /// step before the insert succeeds.
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<TokenResponseDto> {
        if self.repository.find_by_email(&dto.email).await?.is_some() {
            tracing::debug!("Registration rejected, email already registered");
            return Err(AppError::UserExists);
        }

        let avatar = self.gravatar.url(&dto.email);
        let password = self.hash_password(dto.password).await?;

        let user = self
            .repository
            .create(NewUser {
                name: dto.name,
                email: dto.email,
                avatar,
                password,
            })
            .await?;

        let token = self.token_service.sign(user.id)?;

        tracing::info!("User registered: id={}", user.id);

        Ok(TokenResponseDto { token })
    }

    // bcrypt is CPU-bound; keep it off the async workers
    async fn hash_password(&self, password: String) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
    }
}
