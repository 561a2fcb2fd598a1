//! Business needs: buy/sell/outsource postings
//!
//! A posting is submitted as a [`NeedDraft`] (the wizard's form state) and
//! turned into a [`BusinessNeed`] with a generated id, creation date and a
//! keyword-based partner suggestion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};
use crate::serde_helpers::{compact_number, lenient_option};

/// Company that every posting is attributed to until real accounts exist.
pub const POSTING_COMPANY: &str = "Demo Company Ltd";

pub const DEFAULT_LOCATION: &str = "Ho Chi Minh City, Vietnam";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeedType {
    #[default]
    Buy,
    Sell,
    Outsource,
}

impl FromStr for NeedType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            "outsource" => Ok(Self::Outsource),
            other => Err(format!("unknown need type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Industry,
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "industry" => Ok(Self::Industry),
            other => Err(format!("unknown visibility '{other}'")),
        }
    }
}

/// Postings are never closed yet, so every stored need is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeedStatus {
    Open,
}

/// A stored posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessNeed {
    pub id: i64,
    #[serde(rename = "type")]
    pub need_type: NeedType,
    pub product: String,
    pub hs_code: String,
    #[serde(serialize_with = "compact_number")]
    pub quantity: Option<f64>,
    pub unit: String,
    #[serde(serialize_with = "compact_number")]
    pub moq: Option<f64>,
    #[serde(serialize_with = "compact_number")]
    pub price: Option<f64>,
    pub currency: String,
    pub expiry: Option<NaiveDate>,
    pub visibility: Visibility,
    pub description: String,
    pub location: String,
    pub company: String,
    pub status: NeedStatus,
    pub created_at: NaiveDate,
    pub suggested_partners: Vec<String>,
}

fn default_unit() -> String {
    "tons".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

fn default_visibility() -> Option<Visibility> {
    Some(Visibility::Public)
}

/// Posting form state as the wizard submits it. Absent fields take the
/// form's initial values; visibility starts out public.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedDraft {
    #[serde(rename = "type", default, deserialize_with = "lenient_option")]
    pub need_type: Option<NeedType>,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub hs_code: String,
    #[serde(
        default,
        deserialize_with = "lenient_option",
        serialize_with = "compact_number"
    )]
    pub quantity: Option<f64>,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(
        default,
        deserialize_with = "lenient_option",
        serialize_with = "compact_number"
    )]
    pub moq: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_option",
        serialize_with = "compact_number"
    )]
    pub price: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default, deserialize_with = "lenient_option")]
    pub expiry: Option<NaiveDate>,
    #[serde(default = "default_visibility", deserialize_with = "lenient_option")]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_location")]
    pub location: String,
}

impl Default for NeedDraft {
    fn default() -> Self {
        Self {
            need_type: None,
            product: String::new(),
            hs_code: String::new(),
            quantity: None,
            unit: default_unit(),
            moq: None,
            price: None,
            currency: default_currency(),
            expiry: None,
            visibility: default_visibility(),
            description: String::new(),
            location: default_location(),
        }
    }
}

impl NeedDraft {
    /// Turn the draft into a stored posting. Only the product name is
    /// required; unset type and visibility fall back to buy and public.
    pub fn into_need(self, id: i64, created_at: NaiveDate) -> Result<BusinessNeed> {
        let product = self.product.trim().to_string();
        if product.is_empty() {
            return Err(CoreError::missing_field("product"));
        }
        let suggested_partners = suggest_partners(&product);

        Ok(BusinessNeed {
            id,
            need_type: self.need_type.unwrap_or_default(),
            product,
            hs_code: self.hs_code,
            quantity: self.quantity,
            unit: self.unit,
            moq: self.moq,
            price: self.price,
            currency: self.currency,
            expiry: self.expiry,
            visibility: self.visibility.unwrap_or_default(),
            description: self.description,
            location: self.location,
            company: POSTING_COMPANY.to_string(),
            status: NeedStatus::Open,
            created_at,
            suggested_partners,
        })
    }
}

const PARTNER_SUGGESTIONS: [(&str, [&str; 3]); 4] = [
    (
        "steel",
        ["Global Steel Corp", "Steel Manufacturing Inc", "Asia Steel Trading"],
    ),
    (
        "rice",
        ["AgriTech Solutions", "Food Trading Corp", "Asia Grain Importers"],
    ),
    (
        "coffee",
        ["Premium Coffee Co", "Global Commodities", "Tropical Exports"],
    ),
    (
        "electronics",
        [
            "Tech Components Ltd",
            "Electronic Trading Hub",
            "Digital Solutions Inc",
        ],
    ),
];

const FALLBACK_PARTNERS: [&str; 3] = [
    "General Trading Corp",
    "International Commerce Ltd",
    "Global Partners Inc",
];

/// Partner names for a product: the first keyword contained in the
/// lowercased name wins, otherwise the generic list.
pub fn suggest_partners(product: &str) -> Vec<String> {
    let product = product.to_lowercase();
    let partners = PARTNER_SUGGESTIONS
        .iter()
        .find(|(keyword, _)| product.contains(keyword))
        .map(|(_, partners)| partners)
        .unwrap_or(&FALLBACK_PARTNERS);

    partners.iter().map(|name| name.to_string()).collect()
}

const HS_CODE_SUGGESTIONS: [(&str, &str); 6] = [
    ("Steel Coil", "7208.10.00"),
    ("Steel Bars", "7213.10.00"),
    ("Aluminum Sheets", "7606.11.00"),
    ("Jasmine Rice", "1006.30.00"),
    ("Coffee", "0901.21.00"),
    ("Cement", "2523.29.00"),
];

/// HS code for a product name, if a known product name appears in it.
pub fn suggest_hs_code(product: &str) -> Option<&'static str> {
    let product = product.to_lowercase();
    HS_CODE_SUGGESTIONS
        .iter()
        .find(|(name, _)| product.contains(&name.to_lowercase()))
        .map(|(_, code)| *code)
}

/// Steps of the posting wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    SelectType,
    ProductDetails,
    PricingQuantity,
    Visibility,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::SelectType,
        WizardStep::ProductDetails,
        WizardStep::PricingQuantity,
        WizardStep::Visibility,
        WizardStep::Review,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::SelectType => "Select Type",
            WizardStep::ProductDetails => "Product Details",
            WizardStep::PricingQuantity => "Pricing & Quantity",
            WizardStep::Visibility => "Visibility Settings",
            WizardStep::Review => "Review & Submit",
        }
    }

    /// Whether the draft has everything this step asks for.
    pub fn is_complete(self, draft: &NeedDraft) -> bool {
        match self {
            WizardStep::SelectType => draft.need_type.is_some(),
            WizardStep::ProductDetails => {
                !draft.product.trim().is_empty() && !draft.hs_code.trim().is_empty()
            }
            WizardStep::PricingQuantity => draft.quantity.is_some() && draft.price.is_some(),
            WizardStep::Visibility => draft.visibility.is_some(),
            WizardStep::Review => true,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-step completeness of a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStatus {
    pub step: usize,
    pub label: &'static str,
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardReport {
    pub valid: bool,
    pub steps: Vec<StepStatus>,
    pub first_incomplete: Option<usize>,
}

pub fn validate_draft(draft: &NeedDraft) -> WizardReport {
    let steps: Vec<StepStatus> = WizardStep::ALL
        .iter()
        .map(|step| StepStatus {
            step: step.index(),
            label: step.label(),
            complete: step.is_complete(draft),
        })
        .collect();
    let first_incomplete = steps.iter().find(|s| !s.complete).map(|s| s.step);

    WizardReport {
        valid: first_incomplete.is_none(),
        steps,
        first_incomplete,
    }
}
