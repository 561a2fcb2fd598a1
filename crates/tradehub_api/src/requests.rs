//! API request types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Login with the company code / user ID / password triple.
/// Missing fields count as empty and simply fail to match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub company_code: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub password: String,
}

/// Registration asks for an OTP to be sent to a phone number.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub company_code: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyOtpRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_id: Option<String>,
    pub otp: String,
}

/// Session lookup; the token travels in the `Authorization` header.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SessionRequest;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DashboardRequest;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HealthCheckRequest;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListNeedsRequest;

/// Wizard validation takes the same body as posting a need.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ValidateNeedRequest;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HsCodeQuery {
    #[serde(default)]
    pub product: String,
}

/// Marketplace search. Numeric parameters stay strings here so blank values
/// can be ignored and bad ones reported by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MarketplaceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PartnerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FinanceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct StoreRequest;

/// Product endpoints. Deletion takes `?id=`; update carries `id` in the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ProductIdQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ProductIdQuery {
    pub fn id(&self) -> Option<i64> {
        self.id.as_deref().and_then(|raw| raw.trim().parse().ok())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CompanyRequest;

/// Product id inside an update body, given either as a number or a numeric
/// string.
pub fn product_id_of(body: &serde_json::Value) -> Option<i64> {
    match body.get("id")? {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
