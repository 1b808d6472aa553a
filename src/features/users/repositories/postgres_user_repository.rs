//! PostgreSQL user repository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::models::{NewUser, User};
use crate::features::users::repositories::UserRepository;

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, avatar, password, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find user by email: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, avatar, password, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find user by id: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, avatar, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, avatar, password, created_at, updated_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.avatar)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            // Lost the race against a concurrent registration of the same email
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                tracing::warn!("Unique violation inserting user: {}", db.message());
                AppError::UserExists
            }
            e => {
                tracing::error!("Failed to insert user: {:?}", e);
                AppError::Database(e)
            }
        })
    }
}
