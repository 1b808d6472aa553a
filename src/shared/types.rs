use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned for every non-500 failure
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: Vec<FieldError>,
}

/// A single error entry.
///
/// Validation failures carry the offending `param` and its `location`;
/// request-level errors (duplicate email, bad token) only carry `msg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl FieldError {
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
            location: None,
        }
    }

    pub fn for_body_field(msg: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: Some(param.into()),
            location: Some("body".to_string()),
        }
    }
}
