//! Marketplace search

use axum::{Json, extract::State};
use tradehub_api::{ApiError, requests::MarketplaceQuery, responses::MarketplaceResponse};
use tradehub_core::marketplace::CompanyFilter;

use crate::{extract::ApiQuery, state::AppState};

pub async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MarketplaceQuery>,
) -> Result<Json<MarketplaceResponse>, ApiError> {
    tracing::debug!(?query, "marketplace search");
    let filter = CompanyFilter::from_params(
        query.search.as_deref(),
        query.sector.as_deref(),
        query.rating.as_deref(),
    )?;

    let catalog = &state.catalog;
    Ok(Json(MarketplaceResponse {
        companies: filter.apply(&catalog.companies),
        featured_products: catalog.featured_products.clone(),
        latest_needs: catalog.latest_needs.clone(),
    }))
}
