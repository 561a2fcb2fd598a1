//! API response types

use serde::{Deserialize, Serialize};
use tradehub_core::{
    auth::SessionUser,
    company::CompanyProfile,
    finance::FinanceService,
    marketplace::{Company, FeaturedProduct, LatestNeed},
    partner::Partner,
    BusinessNeed, Product, StoreProfile,
};

/// Successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user: SessionUser,
    /// Whether the client must complete the OTP step next
    #[serde(rename = "needsOTP")]
    pub needs_otp: bool,
    /// Demo bearer string, `demo_token_<userID>`
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub otp_id: String,
    #[serde(rename = "demoOTP")]
    pub demo_otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    pub user: SessionUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeedsResponse {
    pub needs: Vec<BusinessNeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNeedResponse {
    pub success: bool,
    pub need: BusinessNeed,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HsCodeResponse {
    pub product: String,
    pub hs_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceResponse {
    pub companies: Vec<Company>,
    pub featured_products: Vec<FeaturedProduct>,
    pub latest_needs: Vec<LatestNeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnersResponse {
    pub partners: Vec<Partner>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceResponse {
    pub services: Vec<FinanceService>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreUpdateResponse {
    pub success: bool,
    pub data: StoreProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub company: CompanyProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyUpdateResponse {
    pub success: bool,
    pub company: CompanyProfile,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}
