//! API error types

use miette::{Diagnostic, JSONReportHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tradehub_core::CoreError;

/// API error response. Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error, Diagnostic, Serialize, Deserialize)]
pub enum ApiError {
    /// Request validation failed
    #[error("{message}")]
    #[diagnostic(
        code(api::validation_error),
        help("Check the field errors for specific validation issues")
    )]
    ValidationError {
        message: String,
        fields: Option<Vec<FieldError>>,
    },

    /// Credentials or token rejected
    #[error("{message}")]
    #[diagnostic(
        code(api::unauthorized),
        help("Please provide valid authentication credentials")
    )]
    Unauthorized { message: String },

    /// Resource not found
    #[error("{resource_type} not found")]
    #[diagnostic(
        code(api::not_found),
        help("The {resource_type} with ID '{resource_id}' does not exist")
    )]
    NotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Request body parsed but didn't fit the request type
    #[error("Invalid request body: {message}")]
    #[diagnostic(
        code(api::json_error),
        help("Check the field names and value types")
    )]
    Json { message: String, json: String },

    /// Anything that escaped a handler
    #[error("Internal server error")]
    #[diagnostic(code(api::internal_error))]
    Internal,
}

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::ValidationError { .. } => 400,
            ApiError::Json { .. } => 400,
            ApiError::Unauthorized { .. } => 401,
            ApiError::NotFound { .. } => 404,
            ApiError::Internal => 500,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            fields: None,
        }
    }

    /// Create a validation error with field-specific errors
    pub fn validation_with_fields(message: impl Into<String>, fields: Vec<FieldError>) -> Self {
        Self::ValidationError {
            message: message.into(),
            fields: Some(fields),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound { id } => Self::not_found("Product", id.to_string()),
            CoreError::MissingField { ref field } => {
                let field = field.clone();
                let message = err.to_string();
                Self::validation_with_fields(
                    message.clone(),
                    vec![FieldError { field, message }],
                )
            }
            CoreError::InvalidFilter { ref param, .. } => {
                let field = param.clone();
                let message = err.to_string();
                Self::validation_with_fields(
                    message.clone(),
                    vec![FieldError { field, message }],
                )
            }
            CoreError::InvalidPatch { .. } => Self::validation(err.to_string()),
        }
    }
}

impl ApiError {
    /// Well-formed JSON whose fields don't fit the request type. Carries the
    /// miette JSON report as `detail`.
    pub fn invalid_body(message: impl Into<String>) -> Self {
        let message = message.into();
        let diagnostic = miette::miette!(
            code = "json::invalid_body",
            help = "Check the field names and value types",
            "{}",
            message
        );

        let handler = JSONReportHandler::new();
        let mut json = String::new();
        handler
            .render_report(&mut json, diagnostic.as_ref())
            .unwrap_or_default();

        Self::Json { message, json }
    }
}

/// A body that doesn't parse at all is a failed request, reported with the
/// generic 500 body; a parsed body with the wrong fields is the client's 400.
#[cfg(feature = "server")]
impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        use axum::extract::rejection::JsonRejection;

        match rejection {
            JsonRejection::JsonDataError(err) => Self::invalid_body(err.body_text()),
            JsonRejection::MissingJsonContentType(err) => Self::validation(err.body_text()),
            _ => Self::Internal,
        }
    }
}

#[cfg(feature = "server")]
impl From<axum::extract::rejection::QueryRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

// Server-side response conversion
#[cfg(feature = "server")]
impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut body = serde_json::json!({
            "error": self.to_string(),
        });

        match &self {
            ApiError::ValidationError {
                fields: Some(fields),
                ..
            } => {
                body["fields"] = serde_json::to_value(fields).unwrap_or_default();
            }
            ApiError::Json { json, .. } if !json.is_empty() => {
                body["detail"] = serde_json::Value::String(json.clone());
            }
            _ => {}
        }

        (status, Json(body)).into_response()
    }
}
