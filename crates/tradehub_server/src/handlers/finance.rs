use axum::{Json, extract::State};
use tradehub_api::{requests::FinanceQuery, responses::FinanceResponse};
use tradehub_core::finance::in_category;

use crate::{extract::ApiQuery, state::AppState};

pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FinanceQuery>,
) -> Json<FinanceResponse> {
    tracing::debug!(category = ?query.category, "listing finance services");
    Json(FinanceResponse {
        services: in_category(&state.catalog.finance_services, query.category.as_deref()),
    })
}
