#[cfg(test)]
use crate::core::config::JwtConfig;
#[cfg(test)]
use crate::features::auth::{AuthService, TokenService};
#[cfg(test)]
use crate::features::users::repositories::InMemoryUserRepository;
#[cfg(test)]
use crate::features::users::{BcryptHasher, RegistrationService};
#[cfg(test)]
use crate::modules::gravatar::Gravatar;
#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::time::Duration;

/// Lowest cost bcrypt accepts; keeps handler tests fast
#[cfg(test)]
pub const TEST_BCRYPT_COST: u32 = 4;

#[cfg(test)]
pub fn test_token_service() -> TokenService {
    TokenService::new(&JwtConfig::new(
        "test-secret",
        Duration::from_secs(JwtConfig::DEFAULT_EXPIRES_IN_SECS),
    ))
}

/// The API router wired to an in-memory user store
#[cfg(test)]
pub struct TestApp {
    pub server: TestServer,
    pub repository: Arc<InMemoryUserRepository>,
    pub token_service: Arc<TokenService>,
}

#[cfg(test)]
impl TestApp {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryUserRepository::new());
        let token_service = Arc::new(test_token_service());

        let registration_service = Arc::new(RegistrationService::new(
            repository.clone(),
            Arc::new(BcryptHasher::new(TEST_BCRYPT_COST)),
            Arc::clone(&token_service),
            Gravatar::default(),
        ));
        let auth_service = Arc::new(AuthService::new(repository.clone()));

        let router = crate::api_routes(
            registration_service,
            auth_service,
            Arc::clone(&token_service),
        );

        Self {
            server: TestServer::new(router).expect("test server"),
            repository,
            token_service,
        }
    }
}
