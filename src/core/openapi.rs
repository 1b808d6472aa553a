use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ErrorResponse, FieldError};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users_handlers::register,
        // Auth
        auth::handlers::get_me,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            FieldError,
            // Users
            users_dtos::RegisterRequestDto,
            users_dtos::TokenResponseDto,
            users_dtos::UserProfileDto,
            // Auth
            auth::model::AuthenticatedUser,
        )
    ),
    tags(
        (name = "users", description = "User registration"),
        (name = "auth", description = "Session token endpoints"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "DevConnector Users API",
        version = "0.1.0",
        description = "User registration and session tokens",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
