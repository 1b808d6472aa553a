use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::AuthService;
use crate::features::users::dtos::UserProfileDto;
use crate::shared::types::ErrorResponse;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Get the profile of the token's user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user retrieved successfully", body = UserProfileDto),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse)
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(
    user: AuthenticatedUser,
    State(service): State<Arc<AuthService>>,
) -> Result<Json<UserProfileDto>> {
    let profile = service.get_current_user(user).await?;
    Ok(Json(profile))
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::TestApp;
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use uuid::Uuid;

    async fn register(app: &TestApp) -> String {
        let response = app
            .server
            .post("/api/users")
            .json(&json!({ "name": "Ann", "email": "ann@x.com", "password": "secret1" }))
            .await;
        response.json::<Value>()["token"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_me_returns_profile_for_issued_token() {
        let app = TestApp::new();
        let token = register(&app).await;

        let response = app
            .server
            .get("/api/auth/me")
            .authorization_bearer(&token)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["name"], "Ann");
        assert_eq!(body["email"], "ann@x.com");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_me_without_token_is_unauthorized() {
        let app = TestApp::new();

        let response = app.server.get("/api/auth/me").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        response.assert_json(&json!({ "errors": [{ "msg": "No token, authorization denied" }] }));
    }

    #[tokio::test]
    async fn test_me_with_invalid_token_is_unauthorized() {
        let app = TestApp::new();

        let response = app
            .server
            .get("/api/auth/me")
            .authorization_bearer("not-a-token")
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        response.assert_json(&json!({ "errors": [{ "msg": "Token is not valid" }] }));
    }

    #[tokio::test]
    async fn test_me_for_unknown_user_is_not_found() {
        let app = TestApp::new();
        let token = app.token_service.sign(Uuid::now_v7()).unwrap();

        let response = app
            .server
            .get("/api/auth/me")
            .authorization_bearer(&token)
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
