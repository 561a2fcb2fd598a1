//! Dashboard summary

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialOffer {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub rate: String,
    pub provider: String,
}

/// Everything on the dashboard landing page. Only `active_needs` is live;
/// the rest are demo figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub connections: u32,
    pub active_needs: usize,
    pub trust_score: u8,
    pub store_status: String,
    pub upcoming_events: Vec<String>,
    pub financial_offers: Vec<FinancialOffer>,
}

impl DashboardSummary {
    pub fn with_active_needs(mut self, active_needs: usize) -> Self {
        self.active_needs = active_needs;
        self
    }
}
