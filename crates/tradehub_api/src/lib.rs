//! TradeHub API types and definitions
//!
//! This crate defines the request/response types for the TradeHub HTTP API,
//! shared between the server and any client.

pub mod error;
pub mod requests;
pub mod responses;

pub use error::{ApiError, FieldError};

// Re-export the domain types that appear in requests and responses
pub use tradehub_core::{BusinessNeed, NeedDraft, Product, ProductDraft, StoreProfile};

/// API version constant
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix every endpoint path is mounted under
pub const API_PREFIX: &str = "/api";

/// A request type bound to its route.
pub trait ApiEndpoint {
    /// Path relative to [`API_PREFIX`]
    const PATH: &'static str;
}

macro_rules! endpoint {
    ($ty:ty, $path:literal) => {
        impl ApiEndpoint for $ty {
            const PATH: &'static str = $path;
        }
    };
}

use requests::*;

endpoint!(LoginRequest, "/auth/login");
endpoint!(RegisterRequest, "/auth/register");
endpoint!(VerifyOtpRequest, "/auth/verify-otp");
endpoint!(SessionRequest, "/auth/session");
endpoint!(DashboardRequest, "/dashboard");
endpoint!(FinanceQuery, "/finance");
endpoint!(ListNeedsRequest, "/needs");
endpoint!(HsCodeQuery, "/needs/hs-code");
endpoint!(ValidateNeedRequest, "/needs/validate");
endpoint!(MarketplaceQuery, "/marketplace");
endpoint!(PartnerQuery, "/partners");
endpoint!(StoreRequest, "/store");
endpoint!(ProductIdQuery, "/store/product");
endpoint!(CompanyRequest, "/company");
endpoint!(HealthCheckRequest, "/health");
