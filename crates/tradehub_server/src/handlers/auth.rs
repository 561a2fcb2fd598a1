//! Demo authentication handlers

use axum::{Json, http::HeaderMap};
use tradehub_api::{
    ApiError,
    requests::{LoginRequest, RegisterRequest, VerifyOtpRequest},
    responses::{LoginResponse, MessageResponse, RegisterResponse, SessionResponse},
};
use tradehub_core::auth::{self, DEMO_OTP};

use crate::{extract::ApiJson, middleware::extract_bearer_token};

/// Handle login requests
pub async fn login(
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let account = auth::authenticate(&request.company_code, &request.user_id, &request.password)
        .ok_or_else(|| {
            tracing::warn!(
                company_code = %request.company_code,
                user_id = %request.user_id,
                "rejected login"
            );
            ApiError::unauthorized("Invalid credentials")
        })?;

    tracing::info!(user_id = account.user_id, role = %account.role, "demo login");
    Ok(Json(LoginResponse {
        success: true,
        user: account.session_user(),
        needs_otp: account.needs_otp,
        token: account.token(),
    }))
}

/// Registration never fails; the OTP is always the demo code.
pub async fn register(
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Json<RegisterResponse> {
    let otp_id = auth::otp_request_id(chrono::Utc::now().timestamp_millis());
    tracing::info!(
        company_code = %request.company_code,
        phone_number = %request.phone_number,
        %otp_id,
        "registration OTP issued"
    );

    Json(RegisterResponse {
        success: true,
        message: "OTP sent to your phone number".to_string(),
        otp_id,
        demo_otp: DEMO_OTP.to_string(),
    })
}

pub async fn verify_otp(
    ApiJson(request): ApiJson<VerifyOtpRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !auth::verify_otp(&request.otp) {
        tracing::warn!(otp_id = ?request.otp_id, "rejected OTP");
        return Err(ApiError::validation("Invalid OTP"));
    }

    Ok(Json(MessageResponse {
        success: true,
        message: "OTP verified successfully".to_string(),
    }))
}

/// Resolve the bearer token to the demo user it was issued for.
pub async fn session(headers: HeaderMap) -> Result<Json<SessionResponse>, ApiError> {
    let account = extract_bearer_token(&headers)
        .and_then(auth::account_for_token)
        .ok_or_else(|| ApiError::unauthorized("Invalid or missing token"))?;

    Ok(Json(SessionResponse {
        success: true,
        user: account.session_user(),
    }))
}
