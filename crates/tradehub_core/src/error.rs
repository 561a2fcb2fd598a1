use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CoreError {
    #[error("Product not found")]
    #[diagnostic(
        code(tradehub_core::product_not_found),
        help("No store product has id {id}")
    )]
    ProductNotFound { id: i64 },

    #[error("Missing required field: {field}")]
    #[diagnostic(
        code(tradehub_core::missing_field),
        help("Provide a non-empty value for '{field}'")
    )]
    MissingField { field: String },

    #[error("Invalid {param} filter: {value}")]
    #[diagnostic(
        code(tradehub_core::invalid_filter),
        help("The '{param}' query parameter must be a number")
    )]
    InvalidFilter { param: String, value: String },

    #[error("Invalid {target} update: {reason}")]
    #[diagnostic(
        code(tradehub_core::invalid_patch),
        help("Updates must be a JSON object whose fields match the {target} shape")
    )]
    InvalidPatch { target: String, reason: String },
}

impl CoreError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid_filter(param: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFilter {
            param: param.into(),
            value: value.into(),
        }
    }

    pub fn invalid_patch(target: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidPatch {
            target: target.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
