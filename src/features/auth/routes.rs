use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Protected auth routes (require a session token)
pub fn protected_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/me", get(handlers::get_me))
        .with_state(service)
}
