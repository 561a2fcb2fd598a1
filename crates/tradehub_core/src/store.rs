//! Storefront profile and its product listings

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{compact_number, lenient_option};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sku: String,
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
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub hs_code: String,
}

/// Product form as submitted for creation. Id and views are assigned by the
/// store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sku: String,
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
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub hs_code: String,
}

impl ProductDraft {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            sku: self.sku,
            moq: self.moq,
            price: self.price,
            unit: self.unit,
            description: self.description,
            category: self.category,
            views: 0,
            hs_code: self.hs_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePolicy {
    pub payment: Vec<String>,
    pub shipping: String,
    pub warranty: String,
    pub returns: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductViews {
    pub name: String,
    pub views: u64,
}

/// Store traffic figures. These are demo values, not derived from activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStatistics {
    pub total_views: u64,
    pub monthly_views: u64,
    pub top_products: Vec<ProductViews>,
    pub inquiries: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreProfile {
    pub company_name: String,
    pub logo: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub products: Vec<Product>,
    pub policy: StorePolicy,
    pub statistics: StoreStatistics,
}
