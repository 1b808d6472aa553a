pub mod postgres_user_repository;
pub mod user_repository;

#[cfg(test)]
pub mod in_memory_user_repository;

#[cfg(test)]
pub use in_memory_user_repository::InMemoryUserRepository;
pub use postgres_user_repository::PostgresUserRepository;
pub use user_repository::UserRepository;
