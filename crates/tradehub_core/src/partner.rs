//! Partner search directory

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::{non_blank, parse_max_distance, parse_min_rating};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: u32,
    pub name: String,
    pub sector: String,
    pub location: String,
    pub distance: u32,
    pub rating: f64,
    pub main_products: Vec<String>,
    pub verified: bool,
    pub employees: String,
    pub established_year: u16,
    pub annual_revenue: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnerFilter {
    industry: Option<String>,
    max_distance: Option<i64>,
    min_rating: Option<f64>,
}

impl PartnerFilter {
    pub fn from_params(
        industry: Option<&str>,
        distance: Option<&str>,
        rating: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            industry: non_blank(industry).map(str::to_lowercase),
            max_distance: parse_max_distance(distance)?,
            min_rating: parse_min_rating(rating)?,
        })
    }

    pub fn matches(&self, partner: &Partner) -> bool {
        self.industry
            .as_ref()
            .is_none_or(|industry| partner.sector.to_lowercase() == *industry)
            && self
                .max_distance
                .is_none_or(|max| i64::from(partner.distance) <= max)
            && self.min_rating.is_none_or(|min| partner.rating >= min)
    }

    pub fn apply<'a>(&self, partners: impl IntoIterator<Item = &'a Partner>) -> Vec<Partner> {
        partners
            .into_iter()
            .filter(|partner| self.matches(partner))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use pretty_assertions::assert_eq;

    fn ids(partners: &[Partner]) -> Vec<u32> {
        partners.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_industry_is_case_insensitive() {
        let filter = PartnerFilter::from_params(Some("agriculture"), None, None).unwrap();
        assert_eq!(ids(&filter.apply(&seed::partners())), vec![2]);
    }

    #[test]
    fn test_distance_is_inclusive() {
        let filter = PartnerFilter::from_params(None, Some("15"), None).unwrap();
        assert_eq!(ids(&filter.apply(&seed::partners())), vec![1, 4]);

        let filter = PartnerFilter::from_params(None, Some("4"), None).unwrap();
        assert!(filter.apply(&seed::partners()).is_empty());
    }

    #[test]
    fn test_all_filters_together() {
        let filter = PartnerFilter::from_params(None, Some("30"), Some("4.5")).unwrap();
        assert_eq!(ids(&filter.apply(&seed::partners())), vec![1, 2]);

        let filter =
            PartnerFilter::from_params(Some("Construction"), Some("30"), Some("4.5")).unwrap();
        assert!(filter.apply(&seed::partners()).is_empty());
    }

    #[test]
    fn test_no_filters() {
        let filter = PartnerFilter::from_params(None, None, None).unwrap();
        assert_eq!(filter.apply(&seed::partners()).len(), 4);
    }
}
