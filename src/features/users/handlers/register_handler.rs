use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::users::dtos::{RegisterRequestDto, TokenResponseDto};
use crate::features::users::services::RegistrationService;
use crate::shared::types::ErrorResponse;
use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

/// Register a new user
///
/// Returns a session token for the created account.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequestDto,
    responses(
        (status = 200, description = "User registered", body = TokenResponseDto),
        (status = 400, description = "Validation failed or user already exists", body = ErrorResponse),
        (status = 500, description = "Server error", body = String, content_type = "text/plain")
    ),
    tag = "users"
)]
pub async fn register(
    State(service): State<Arc<RegistrationService>>,
    AppJson(dto): AppJson<RegisterRequestDto>,
) -> Result<Json<TokenResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::from_validation(&e, RegisterRequestDto::FIELD_ORDER))?;

    let response = service.register(dto).await?;
    Ok(Json(response))
}
