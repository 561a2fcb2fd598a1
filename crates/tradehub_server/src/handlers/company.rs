use axum::{Json, extract::State};
use tradehub_api::responses::{CompanyResponse, CompanyUpdateResponse};
use tradehub_core::company::CompanyProfile;

use crate::{extract::ApiJson, state::AppState};

pub async fn profile(State(state): State<AppState>) -> Json<CompanyResponse> {
    Json(CompanyResponse {
        company: state.company.company(),
    })
}

/// Replace the whole profile; every field must be present.
pub async fn replace(
    State(state): State<AppState>,
    ApiJson(profile): ApiJson<CompanyProfile>,
) -> Json<CompanyUpdateResponse> {
    Json(CompanyUpdateResponse {
        success: true,
        company: state.company.replace_company(profile),
    })
}
