//! Business needs: listing, posting and the posting wizard helpers

use axum::{Json, extract::State};
use tradehub_api::{
    ApiError,
    requests::HsCodeQuery,
    responses::{CreateNeedResponse, HsCodeResponse, NeedsResponse},
};
use tradehub_core::{
    NeedDraft,
    need::{WizardReport, suggest_hs_code, validate_draft},
};

use crate::{
    extract::{ApiJson, ApiQuery},
    state::AppState,
};

pub async fn list(State(state): State<AppState>) -> Json<NeedsResponse> {
    Json(NeedsResponse {
        needs: state.needs.list(),
    })
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<NeedDraft>,
) -> Result<Json<CreateNeedResponse>, ApiError> {
    let today = chrono::Utc::now().date_naive();
    let need = state.needs.create(draft, today)?;

    Ok(Json(CreateNeedResponse {
        success: true,
        need,
        message: "Business need posted successfully".to_string(),
    }))
}

pub async fn hs_code(ApiQuery(query): ApiQuery<HsCodeQuery>) -> Json<HsCodeResponse> {
    let hs_code = suggest_hs_code(&query.product).map(str::to_string);
    Json(HsCodeResponse {
        product: query.product,
        hs_code,
    })
}

/// Report which wizard steps the draft completes.
pub async fn validate(ApiJson(draft): ApiJson<NeedDraft>) -> Json<WizardReport> {
    let report = validate_draft(&draft);
    tracing::debug!(valid = report.valid, first_incomplete = ?report.first_incomplete, "validated need draft");
    Json(report)
}
