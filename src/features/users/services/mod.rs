pub mod password_hasher;
pub mod registration_service;

pub use password_hasher::{BcryptHasher, PasswordHasher};
pub use registration_service::RegistrationService;
