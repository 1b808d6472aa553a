//! User registration feature.
//!
//! Creates accounts and hands back a signed session token. Storage, password
//! hashing and token signing are injected so the pipeline can run against
//! an in-memory store in tests.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/users` | No | Register a user and return a session token |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PostgresUserRepository, UserRepository};
pub use services::{BcryptHasher, PasswordHasher, RegistrationService};
