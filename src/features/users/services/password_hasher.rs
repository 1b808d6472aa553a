//! Password hashing using bcrypt

use std::fmt::Debug;

use crate::core::error::{AppError, Result};

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password with a fresh random salt
    fn hash(&self, password: &str) -> Result<String>;

    /// Verify a password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// bcrypt-based password hasher
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PasswordConfig;

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptHasher::new(PasswordConfig::DEFAULT_BCRYPT_COST);

        let hash = hasher.hash("secret1").unwrap();

        assert_ne!(hash, "secret1");
        assert!(hash.starts_with("$2b$10$"));
        assert!(hasher.verify("secret1", &hash));
        assert!(!hasher.verify("secret2", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = BcryptHasher::new(4);

        let hash1 = hasher.hash("secret1").unwrap();
        let hash2 = hasher.hash("secret1").unwrap();

        assert_ne!(hash1, hash2);
        assert!(hasher.verify("secret1", &hash1));
        assert!(hasher.verify("secret1", &hash2));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = BcryptHasher::new(4);

        assert!(!hasher.verify("secret1", "not-a-bcrypt-hash"));
        assert!(!hasher.verify("secret1", ""));
    }

    #[test]
    fn test_invalid_cost_is_an_error() {
        let hasher = BcryptHasher::new(2);
        assert!(matches!(hasher.hash("secret1"), Err(AppError::Internal(_))));
    }
}
