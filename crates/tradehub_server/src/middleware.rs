//! Middleware: CORS, panic recovery and bearer-token parsing

use std::any::Any;
use std::time::Duration;

use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, Method},
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tradehub_api::ApiError;

use crate::config::CorsConfig;

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Build the CORS layer from configuration. Entries that don't parse are
/// skipped with a warning.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(config.allowed_origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|e| tracing::warn!(%origin, error = %e, "ignoring CORS origin"))
                .ok()
        }))
    };

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|method| {
            Method::from_bytes(method.to_ascii_uppercase().as_bytes())
                .inspect_err(|e| tracing::warn!(%method, error = %e, "ignoring CORS method"))
                .ok()
        })
        .collect();

    let headers = if config.allowed_headers.iter().any(|h| h == "*") {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(config.allowed_headers.iter().filter_map(|header| {
            HeaderName::from_bytes(header.as_bytes())
                .inspect_err(|e| tracing::warn!(%header, error = %e, "ignoring CORS header"))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age))
}

/// Turn a handler panic into the generic 500 body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(%detail, "handler panicked");

    ApiError::Internal.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);

        headers.insert(
            "Authorization",
            HeaderValue::from_static("Bearer demo_token_demo_user"),
        );
        assert_eq!(extract_bearer_token(&headers), Some("demo_token_demo_user"));

        headers.insert("Authorization", HeaderValue::from_static("Basic abc"));
        assert_eq!(extract_bearer_token(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Bearer "));
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_panic_response_is_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), 500);
    }
}
