//! Extractors whose rejections render as API errors

use axum::extract::{FromRequest, FromRequestParts};
use tradehub_api::ApiError;

/// `axum::Json` with `{"error": ...}` rejections
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with `{"error": ...}` rejections
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
