//! In-memory user repository used by handler and service tests

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::models::{NewUser, User};
use crate::features::users::repositories::UserRepository;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
    /// When set, lookups by email miss, as if a concurrent request had not
    /// committed yet. Inserts still enforce uniqueness.
    stale_reads: AtomicBool,
    /// When set, every call fails like an unreachable database
    unavailable: AtomicBool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_stale_reads(&self, stale: bool) {
        self.stale_reads.store(stale, Ordering::SeqCst);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn all(&self) -> Vec<User> {
        self.users.read().await.values().cloned().collect()
    }

    pub async fn count_by_email(&self, email: &str) -> usize {
        self.users
            .read()
            .await
            .values()
            .filter(|u| u.email == email)
            .count()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.check_available()?;
        if self.stale_reads.load(Ordering::SeqCst) {
            return Ok(None);
        }

        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        self.check_available()?;
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        self.check_available()?;
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::UserExists);
        }

        let now = Utc::now();
        let created = User {
            id: Uuid::now_v7(),
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            password: user.password,
            created_at: now,
            updated_at: now,
        };
        users.insert(created.id, created.clone());

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Ann".to_string(),
            email: email.to_string(),
            avatar: "https://example.test/avatar".to_string(),
            password: "$2b$10$hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_is_findable() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(new_user("ann@x.com")).await.unwrap();

        let by_email = repo.find_by_email("ann@x.com").await.unwrap().unwrap();
        let by_id = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);
        assert_eq!(by_id.email, "ann@x.com");
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("ann@x.com")).await.unwrap();

        let err = repo.create(new_user("ann@x.com")).await.unwrap_err();
        assert!(matches!(err, AppError::UserExists));
        assert_eq!(repo.count_by_email("ann@x.com").await, 1);
    }

    #[tokio::test]
    async fn test_unavailable_fails_with_database_error() {
        let repo = InMemoryUserRepository::new();
        repo.set_unavailable(true);

        let err = repo.find_by_email("ann@x.com").await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
