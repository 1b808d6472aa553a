use crate::features::users::handlers;
use crate::features::users::services::RegistrationService;
use axum::{routing::post, Router};
use std::sync::Arc;

/// Public user routes (no authentication required)
pub fn routes(service: Arc<RegistrationService>) -> Router {
    Router::new()
        .route("/api/users", post(handlers::register))
        .with_state(service)
}
