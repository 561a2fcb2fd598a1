//! HTTP request handlers

use axum::{
    Router,
    routing::{get, post},
};

pub mod auth;
pub mod company;
pub mod dashboard;
pub mod finance;
pub mod health;
pub mod marketplace;
pub mod needs;
pub mod partners;
pub mod store;

use crate::state::AppState;

/// Build all API routes
pub fn routes() -> Router<AppState> {
    use tradehub_api::{ApiEndpoint, requests::*};

    Router::new()
        // Health check
        .route(HealthCheckRequest::PATH, get(health::health_check))
        // Auth endpoints
        .route(LoginRequest::PATH, post(auth::login))
        .route(RegisterRequest::PATH, post(auth::register))
        .route(VerifyOtpRequest::PATH, post(auth::verify_otp))
        .route(SessionRequest::PATH, get(auth::session))
        // Dashboard and directories
        .route(DashboardRequest::PATH, get(dashboard::summary))
        .route(MarketplaceQuery::PATH, get(marketplace::search))
        .route(PartnerQuery::PATH, get(partners::search))
        .route(FinanceQuery::PATH, get(finance::list))
        // Business needs
        .route(
            ListNeedsRequest::PATH,
            get(needs::list).post(needs::create),
        )
        .route(HsCodeQuery::PATH, get(needs::hs_code))
        .route(ValidateNeedRequest::PATH, post(needs::validate))
        // Storefront
        .route(StoreRequest::PATH, get(store::profile).put(store::update))
        .route(
            ProductIdQuery::PATH,
            post(store::add_product)
                .put(store::update_product)
                .delete(store::delete_product),
        )
        // Company profile
        .route(
            CompanyRequest::PATH,
            get(company::profile).put(company::replace),
        )
}
