//! Company profile edited from the dashboard

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub employees: String,
    pub sector: String,
    pub description: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "Your Company Name".to_string(),
            address: "123 Business Street, City, Country".to_string(),
            phone: "+1 234 567 8900".to_string(),
            email: "info@yourcompany.com".to_string(),
            website: "www.yourcompany.com".to_string(),
            employees: "50-100".to_string(),
            sector: "Manufacturing".to_string(),
            description: "Company description here...".to_string(),
        }
    }
}
