use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::shared::constants::{MSG_SERVER_ERROR, MSG_USER_EXISTS};
use crate::shared::types::{ErrorResponse, FieldError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("User already exists")]
    UserExists,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Flattens `validator` output into field errors, ordered by `field_order`.
    ///
    /// Fields missing from `field_order` come last, sorted by name. Every
    /// failing rule of a field is reported.
    pub fn from_validation(errors: &ValidationErrors, field_order: &[&str]) -> Self {
        let field_errors = errors.field_errors();

        let mut fields: Vec<&str> = field_errors.keys().map(|k| &**k).collect();
        fields.sort_by_key(|field| {
            (
                field_order
                    .iter()
                    .position(|f| f == field)
                    .unwrap_or(usize::MAX),
                *field,
            )
        });

        let mut out = Vec::new();
        for field in fields {
            if let Some(rules) = field_errors.get(field) {
                for rule in rules.iter() {
                    let msg = rule
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", rule.code));
                    out.push(FieldError::for_body_field(msg, field));
                }
            }
        }

        AppError::Validation(out)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            AppError::Validation(errors) => (StatusCode::BAD_REQUEST, errors),
            AppError::UserExists => (
                StatusCode::BAD_REQUEST,
                vec![FieldError::message(MSG_USER_EXISTS)],
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, vec![FieldError::message(msg)]),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, vec![FieldError::message(msg)]),
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, vec![FieldError::message(msg)])
            }
            // Infrastructure failures stay opaque to the caller
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                return (StatusCode::INTERNAL_SERVER_ERROR, MSG_SERVER_ERROR).into_response();
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                return (StatusCode::INTERNAL_SERVER_ERROR, MSG_SERVER_ERROR).into_response();
            }
        };

        (status, Json(ErrorResponse { errors })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    fn failing(errors: &mut ValidationErrors, field: &'static str, msg: &'static str) {
        errors.add(field, ValidationError::new("test").with_message(msg.into()));
    }

    #[test]
    fn test_validation_errors_follow_field_order() {
        let mut errors = ValidationErrors::new();
        failing(&mut errors, "password", "p");
        failing(&mut errors, "name", "n");
        failing(&mut errors, "email", "e");

        let AppError::Validation(fields) =
            AppError::from_validation(&errors, &["name", "email", "password"])
        else {
            panic!("expected validation error");
        };

        let msgs: Vec<&str> = fields.iter().map(|f| f.msg.as_str()).collect();
        assert_eq!(msgs, vec!["n", "e", "p"]);
        assert_eq!(fields[0].param.as_deref(), Some("name"));
        assert_eq!(fields[0].location.as_deref(), Some("body"));
    }

    #[test]
    fn test_validation_error_without_message_uses_code() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("length"));

        let AppError::Validation(fields) = AppError::from_validation(&errors, &[]) else {
            panic!("expected validation error");
        };
        assert_eq!(fields.len(), 1);
        assert!(fields[0].msg.contains("length"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::UserExists.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("x".into()).into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolTimedOut)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
