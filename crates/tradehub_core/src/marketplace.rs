//! Marketplace directory: companies, featured products and the latest
//! postings shown on the public marketplace page

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::{contains_ignore_case, non_blank, parse_min_rating};
use crate::need::NeedType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: u32,
    pub name: String,
    pub rating: f64,
    pub location: String,
    pub sector: String,
    pub products: Vec<String>,
    pub logo: String,
    pub description: String,
    pub verified: bool,
    pub distance: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedProduct {
    pub id: u32,
    pub name: String,
    pub company: String,
    pub price: String,
    pub moq: String,
    pub image: String,
    pub hs_code: String,
}

/// A posting teaser. `quantity` and `posted_date` are display strings
/// ("500 tons", "2 hours ago").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestNeed {
    pub id: u32,
    #[serde(rename = "type")]
    pub need_type: NeedType,
    pub title: String,
    pub company: String,
    pub quantity: String,
    pub location: String,
    pub posted_date: String,
    pub status: String,
}

/// Parsed marketplace search parameters. Every set field narrows the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyFilter {
    search: Option<String>,
    sector: Option<String>,
    min_rating: Option<f64>,
}

impl CompanyFilter {
    pub fn from_params(
        search: Option<&str>,
        sector: Option<&str>,
        rating: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            search: non_blank(search).map(str::to_lowercase),
            sector: non_blank(sector).map(str::to_lowercase),
            min_rating: parse_min_rating(rating)?,
        })
    }

    pub fn matches(&self, company: &Company) -> bool {
        if let Some(search) = &self.search {
            let hit = contains_ignore_case(&company.name, search)
                || company
                    .products
                    .iter()
                    .any(|product| contains_ignore_case(product, search));
            if !hit {
                return false;
            }
        }
        if let Some(sector) = &self.sector {
            if company.sector.to_lowercase() != *sector {
                return false;
            }
        }
        if let Some(min) = self.min_rating {
            if company.rating < min {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, companies: impl IntoIterator<Item = &'a Company>) -> Vec<Company> {
        companies
            .into_iter()
            .filter(|company| self.matches(company))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use pretty_assertions::assert_eq;

    fn names(companies: &[Company]) -> Vec<&str> {
        companies.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_min_rating_filter() {
        let filter = CompanyFilter::from_params(None, None, Some("4.8")).unwrap();
        let hits = filter.apply(&seed::companies());
        assert_eq!(names(&hits), vec!["Global Steel Corp", "AgriTech Solutions"]);
    }

    #[test]
    fn test_search_matches_name_or_product() {
        let filter = CompanyFilter::from_params(Some("STEEL"), None, None).unwrap();
        let hits = filter.apply(&seed::companies());
        // "Construction Steel" is a product of Construction Materials Inc
        assert_eq!(
            names(&hits),
            vec!["Global Steel Corp", "Construction Materials Inc"]
        );

        let filter = CompanyFilter::from_params(Some("coffee"), None, None).unwrap();
        assert_eq!(names(&filter.apply(&seed::companies())), vec!["AgriTech Solutions"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let filter =
            CompanyFilter::from_params(Some("steel"), Some("construction"), Some("4.5")).unwrap();
        assert!(filter.apply(&seed::companies()).is_empty());

        let filter =
            CompanyFilter::from_params(Some("steel"), Some("Manufacturing"), Some("4.5")).unwrap();
        assert_eq!(names(&filter.apply(&seed::companies())), vec!["Global Steel Corp"]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = CompanyFilter::from_params(Some(""), Some(""), Some("")).unwrap();
        assert_eq!(filter, CompanyFilter::default());
        assert_eq!(filter.apply(&seed::companies()).len(), 4);
    }
}
