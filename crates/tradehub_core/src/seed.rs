//! Demo data every process starts with

use chrono::NaiveDate;

use crate::dashboard::{DashboardSummary, FinancialOffer};
use crate::finance::FinanceService;
use crate::marketplace::{Company, FeaturedProduct, LatestNeed};
use crate::need::{BusinessNeed, NeedStatus, NeedType, Visibility};
use crate::partner::Partner;
use crate::store::{Product, ProductViews, StorePolicy, StoreProfile, StoreStatistics};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn companies() -> Vec<Company> {
    vec![
        Company {
            id: 1,
            name: "Global Steel Corp".to_string(),
            rating: 4.8,
            location: "Shanghai, China".to_string(),
            sector: "Manufacturing".to_string(),
            products: strings(&["Steel Coils", "Steel Bars", "Steel Sheets"]),
            logo: "/demo/company1.png".to_string(),
            description: "Leading steel manufacturer with 20+ years experience".to_string(),
            verified: true,
            distance: 10,
        },
        Company {
            id: 2,
            name: "Pacific Trading Ltd".to_string(),
            rating: 4.5,
            location: "Singapore".to_string(),
            sector: "Trading".to_string(),
            products: strings(&["Electronics", "Automotive Parts", "Machinery"]),
            logo: "/demo/company2.png".to_string(),
            description: "Trusted trading partner for Southeast Asia".to_string(),
            verified: true,
            distance: 25,
        },
        Company {
            id: 3,
            name: "AgriTech Solutions".to_string(),
            rating: 4.9,
            location: "Bangkok, Thailand".to_string(),
            sector: "Agriculture".to_string(),
            products: strings(&["Rice", "Coffee", "Spices", "Agricultural Equipment"]),
            logo: "/demo/company3.png".to_string(),
            description: "Premium agricultural products and technology".to_string(),
            verified: true,
            distance: 15,
        },
        Company {
            id: 4,
            name: "Construction Materials Inc".to_string(),
            rating: 4.2,
            location: "Ho Chi Minh City, Vietnam".to_string(),
            sector: "Construction".to_string(),
            products: strings(&["Cement", "Concrete", "Construction Steel"]),
            logo: "/demo/company4.png".to_string(),
            description: "Quality construction materials supplier".to_string(),
            verified: false,
            distance: 5,
        },
    ]
}

pub fn featured_products() -> Vec<FeaturedProduct> {
    vec![
        FeaturedProduct {
            id: 1,
            name: "Premium Steel Coils".to_string(),
            company: "Global Steel Corp".to_string(),
            price: "$500/ton".to_string(),
            moq: "100 tons".to_string(),
            image: "/demo/product1.jpg".to_string(),
            hs_code: "7208.10.00".to_string(),
        },
        FeaturedProduct {
            id: 2,
            name: "Jasmine Rice Grade A".to_string(),
            company: "AgriTech Solutions".to_string(),
            price: "$800/ton".to_string(),
            moq: "50 tons".to_string(),
            image: "/demo/product2.jpg".to_string(),
            hs_code: "1006.30.00".to_string(),
        },
    ]
}

fn teaser(
    id: u32,
    need_type: NeedType,
    title: &str,
    company: &str,
    quantity: &str,
    location: &str,
    posted_date: &str,
) -> LatestNeed {
    LatestNeed {
        id,
        need_type,
        title: title.to_string(),
        company: company.to_string(),
        quantity: quantity.to_string(),
        location: location.to_string(),
        posted_date: posted_date.to_string(),
        status: "Open".to_string(),
    }
}

pub fn latest_needs() -> Vec<LatestNeed> {
    vec![
        teaser(
            1,
            NeedType::Buy,
            "Looking for High-Grade Steel Coils",
            "Construction Materials Inc",
            "500 tons",
            "Vietnam",
            "2 hours ago",
        ),
        teaser(
            2,
            NeedType::Sell,
            "Premium Coffee Beans Available",
            "AgriTech Solutions",
            "200 tons",
            "Thailand",
            "5 hours ago",
        ),
        teaser(
            3,
            NeedType::Outsource,
            "Manufacturing Partnership Needed",
            "Pacific Trading Ltd",
            "Long-term contract",
            "Singapore",
            "1 day ago",
        ),
    ]
}

pub fn partners() -> Vec<Partner> {
    vec![
        Partner {
            id: 1,
            name: "Global Steel Manufacturing".to_string(),
            sector: "Manufacturing".to_string(),
            location: "Shanghai, China".to_string(),
            distance: 15,
            rating: 4.8,
            main_products: strings(&["Steel Coils", "Steel Bars", "Steel Sheets"]),
            verified: true,
            employees: "500-1000".to_string(),
            established_year: 2005,
            annual_revenue: "$50M - $100M".to_string(),
        },
        Partner {
            id: 2,
            name: "AgriTech Solutions Co".to_string(),
            sector: "Agriculture".to_string(),
            location: "Bangkok, Thailand".to_string(),
            distance: 25,
            rating: 4.9,
            main_products: strings(&["Jasmine Rice", "Coffee Beans", "Spices"]),
            verified: true,
            employees: "100-500".to_string(),
            established_year: 2010,
            annual_revenue: "$10M - $50M".to_string(),
        },
        Partner {
            id: 3,
            name: "Pacific Electronics Trading".to_string(),
            sector: "Electronics".to_string(),
            location: "Singapore".to_string(),
            distance: 50,
            rating: 4.5,
            main_products: strings(&[
                "Electronic Components",
                "Semiconductors",
                "Circuit Boards",
            ]),
            verified: false,
            employees: "50-100".to_string(),
            established_year: 2015,
            annual_revenue: "$5M - $10M".to_string(),
        },
        Partner {
            id: 4,
            name: "Construction Materials Ltd".to_string(),
            sector: "Construction".to_string(),
            location: "Ho Chi Minh City, Vietnam".to_string(),
            distance: 5,
            rating: 4.2,
            main_products: strings(&["Cement", "Concrete", "Construction Steel"]),
            verified: true,
            employees: "200-500".to_string(),
            established_year: 2008,
            annual_revenue: "$20M - $50M".to_string(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn service(
    id: u32,
    name: &str,
    description: &str,
    provider: &str,
    rate: &str,
    max_amount: &str,
    processing_time: &str,
    requirements: &[&str],
    category: &str,
) -> FinanceService {
    FinanceService {
        id,
        name: name.to_string(),
        description: description.to_string(),
        provider: provider.to_string(),
        rate: rate.to_string(),
        max_amount: max_amount.to_string(),
        processing_time: processing_time.to_string(),
        requirements: strings(requirements),
        status: "available".to_string(),
        category: category.to_string(),
    }
}

pub fn finance_services() -> Vec<FinanceService> {
    vec![
        service(
            1,
            "Trade Financing",
            "Working capital support for international trade transactions",
            "Demo Bank",
            "5.5% APR",
            "$1,000,000",
            "3-5 business days",
            &[
                "Valid trade contract",
                "Financial statements",
                "Collateral assessment",
            ],
            "financing",
        ),
        service(
            2,
            "Letter of Credit",
            "Secure payment guarantee for international transactions",
            "Global Trade Bank",
            "1.2% fee",
            "$5,000,000",
            "1-2 business days",
            &["Trade agreement", "Shipping documents", "Invoice"],
            "guarantee",
        ),
        service(
            3,
            "E-Signature Service",
            "Digital contract signing and authentication platform",
            "DocuSign Partner",
            "$15 per document",
            "Unlimited",
            "Instant",
            &["Valid identification", "Email verification"],
            "digital",
        ),
        service(
            4,
            "Bank Guarantee",
            "Financial guarantee for contract performance",
            "International Bank",
            "2.5% - 3.5%",
            "$2,000,000",
            "5-7 business days",
            &["Credit assessment", "Project details", "Collateral"],
            "guarantee",
        ),
        service(
            5,
            "Trade Insurance",
            "Protection against trade risks and non-payment",
            "Trade Insurance Corp",
            "0.5% - 2% of value",
            "$10,000,000",
            "2-3 business days",
            &["Trade details", "Partner information", "Risk assessment"],
            "insurance",
        ),
    ]
}

pub fn business_needs() -> Vec<BusinessNeed> {
    vec![
        BusinessNeed {
            id: 1,
            need_type: NeedType::Buy,
            product: "Steel Coil".to_string(),
            hs_code: "7208.10.00".to_string(),
            quantity: Some(500.0),
            unit: "tons".to_string(),
            moq: Some(100.0),
            price: Some(450.0),
            currency: "USD".to_string(),
            expiry: Some(date(2025, 12, 31)),
            visibility: Visibility::Public,
            description: "Looking for high-grade steel coils for construction project".to_string(),
            location: "Ho Chi Minh City, Vietnam".to_string(),
            company: "Demo Company Ltd".to_string(),
            status: NeedStatus::Open,
            created_at: date(2025, 1, 15),
            suggested_partners: strings(&["Global Steel Corp", "Steel Manufacturing Inc"]),
        },
        BusinessNeed {
            id: 2,
            need_type: NeedType::Sell,
            product: "Jasmine Rice".to_string(),
            hs_code: "1006.30.00".to_string(),
            quantity: Some(1000.0),
            unit: "tons".to_string(),
            moq: Some(50.0),
            price: Some(800.0),
            currency: "USD".to_string(),
            expiry: Some(date(2025, 6, 30)),
            visibility: Visibility::Public,
            description: "Premium quality jasmine rice, Grade A".to_string(),
            location: "Bangkok, Thailand".to_string(),
            company: "AgriTech Solutions".to_string(),
            status: NeedStatus::Open,
            created_at: date(2025, 1, 14),
            suggested_partners: strings(&["Food Trading Corp", "Asia Grain Importers"]),
        },
    ]
}

pub fn store_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Steel Coil".to_string(),
            sku: "SP001".to_string(),
            moq: Some(100.0),
            price: Some(500.0),
            unit: "tons".to_string(),
            description: "High-grade steel coils for construction".to_string(),
            category: "Steel Products".to_string(),
            views: 200,
            hs_code: "7208.10.00".to_string(),
        },
        Product {
            id: 2,
            name: "Aluminum Sheets".to_string(),
            sku: "AP002".to_string(),
            moq: Some(50.0),
            price: Some(800.0),
            unit: "sheets".to_string(),
            description: "Premium aluminum sheets for aerospace industry".to_string(),
            category: "Aluminum Products".to_string(),
            views: 150,
            hs_code: "7606.11.00".to_string(),
        },
    ]
}

pub fn store_profile() -> StoreProfile {
    StoreProfile {
        company_name: "Demo Company Ltd".to_string(),
        logo: "/demo/logo.png".to_string(),
        description: "Leading manufacturer of high-quality steel products".to_string(),
        address: "123 Industrial Street, Manufacturing District".to_string(),
        phone: "+1-555-0123".to_string(),
        email: "contact@democompany.com".to_string(),
        website: "www.democompany.com".to_string(),
        products: store_products(),
        policy: StorePolicy {
            payment: strings(&["Letter of Credit", "Bank Transfer", "Trade Finance"]),
            shipping: "Worldwide shipping available".to_string(),
            warranty: "12 months warranty on all products".to_string(),
            returns: "Returns accepted within 30 days".to_string(),
        },
        statistics: StoreStatistics {
            total_views: 1250,
            monthly_views: 247,
            top_products: vec![
                ProductViews {
                    name: "Steel Coil".to_string(),
                    views: 200,
                },
                ProductViews {
                    name: "Aluminum Sheets".to_string(),
                    views: 150,
                },
            ],
            inquiries: 45,
        },
    }
}

/// Dashboard figures; `active_needs` is overwritten from the live registry.
pub fn dashboard() -> DashboardSummary {
    DashboardSummary {
        connections: 5,
        active_needs: 2,
        trust_score: 80,
        store_status: "incomplete".to_string(),
        upcoming_events: strings(&[
            "Meeting with Company A - Tomorrow 2:00 PM",
            "Call with Bank B - Friday 10:00 AM",
            "Product demo - Next Monday 3:00 PM",
        ]),
        financial_offers: vec![
            FinancialOffer {
                id: 1,
                title: "Trade Financing".to_string(),
                description: "Get up to $500K for your next shipment".to_string(),
                rate: "5.5% APR".to_string(),
                provider: "Demo Bank".to_string(),
            },
            FinancialOffer {
                id: 2,
                title: "Letter of Credit".to_string(),
                description: "Secure international transactions".to_string(),
                rate: "1.2% fee".to_string(),
                provider: "Global Trade Bank".to_string(),
            },
        ],
    }
}

/// Read-only reference data served by the search and listing endpoints.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub companies: Vec<Company>,
    pub featured_products: Vec<FeaturedProduct>,
    pub latest_needs: Vec<LatestNeed>,
    pub partners: Vec<Partner>,
    pub finance_services: Vec<FinanceService>,
    pub dashboard: DashboardSummary,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            companies: companies(),
            featured_products: featured_products(),
            latest_needs: latest_needs(),
            partners: partners(),
            finance_services: finance_services(),
            dashboard: dashboard(),
        }
    }
}
