//! Storefront profile and product handlers

use axum::{Json, extract::State};
use serde_json::Value;
use tradehub_api::{
    ApiError,
    requests::{ProductIdQuery, product_id_of},
    responses::{ProductResponse, StoreUpdateResponse, SuccessResponse},
};
use tradehub_core::{ProductDraft, StoreProfile};

use crate::{
    extract::{ApiJson, ApiQuery},
    state::AppState,
};

pub async fn profile(State(state): State<AppState>) -> Json<StoreProfile> {
    Json(state.store.profile())
}

/// Shallow-merge the body onto the store profile.
pub async fn update(
    State(state): State<AppState>,
    ApiJson(patch): ApiJson<Value>,
) -> Result<Json<StoreUpdateResponse>, ApiError> {
    let data = state.store.update_profile(patch)?;
    Ok(Json(StoreUpdateResponse {
        success: true,
        data,
    }))
}

pub async fn add_product(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<ProductDraft>,
) -> Json<ProductResponse> {
    Json(ProductResponse {
        success: true,
        product: state.store.add_product(draft),
    })
}

pub async fn update_product(
    State(state): State<AppState>,
    ApiJson(patch): ApiJson<Value>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id = product_id_of(&patch).ok_or_else(|| ApiError::validation("Missing product id"))?;
    let product = state.store.update_product(id, patch)?;

    Ok(Json(ProductResponse {
        success: true,
        product,
    }))
}

/// Deleting an id that isn't there still succeeds.
pub async fn delete_product(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProductIdQuery>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let id = query
        .id()
        .ok_or_else(|| ApiError::validation("Missing product id"))?;
    state.store.remove_product(id);

    Ok(Json(SuccessResponse::ok()))
}
