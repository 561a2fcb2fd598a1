//! Financial-service listings

use serde::{Deserialize, Serialize};

use crate::filter::non_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceService {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub provider: String,
    pub rate: String,
    pub max_amount: String,
    pub processing_time: String,
    pub requirements: Vec<String>,
    pub status: String,
    pub category: String,
}

/// Services in the given category (case-insensitive), or all of them when no
/// category is given.
pub fn in_category<'a>(
    services: impl IntoIterator<Item = &'a FinanceService>,
    category: Option<&str>,
) -> Vec<FinanceService> {
    let category = non_blank(category).map(str::to_lowercase);
    services
        .into_iter()
        .filter(|service| {
            category
                .as_ref()
                .is_none_or(|c| service.category.to_lowercase() == *c)
        })
        .cloned()
        .collect()
}
