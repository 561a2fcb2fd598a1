use axum::{Json, extract::State};
use tradehub_api::{ApiError, requests::PartnerQuery, responses::PartnersResponse};
use tradehub_core::partner::PartnerFilter;

use crate::{extract::ApiQuery, state::AppState};

pub async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PartnerQuery>,
) -> Result<Json<PartnersResponse>, ApiError> {
    tracing::debug!(?query, "partner search");
    let filter = PartnerFilter::from_params(
        query.industry.as_deref(),
        query.distance.as_deref(),
        query.rating.as_deref(),
    )?;

    Ok(Json(PartnersResponse {
        partners: filter.apply(&state.catalog.partners),
    }))
}
