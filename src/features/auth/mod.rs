//! Session tokens and authenticated access.
//!
//! Tokens issued at registration are HS256 JWTs carrying `{ user: { id } }`.
//! Protected routes verify them in `core::middleware::auth_middleware`.

pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

pub use services::{AuthService, TokenService};
