use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for user registration.
///
/// Absent fields deserialize to empty strings so they fail validation
/// with a field message instead of rejecting the whole body.
#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
}

impl RegisterRequestDto {
    /// Order in which field errors are reported
    pub const FIELD_ORDER: &'static [&'static str] = &["name", "email", "password"];
}

impl std::fmt::Debug for RegisterRequestDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequestDto")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[hidden]")
            .finish()
    }
}

/// Response DTO carrying the signed session token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponseDto {
    /// HS256 JWT whose payload is `{ user: { id } }`
    pub token: String,
}
