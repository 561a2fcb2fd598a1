//! TradeHub Core - domain model for the demo B2B trading platform
//!
//! Business needs with partner suggestion, the marketplace and partner
//! directories, the storefront, demo authentication, and the in-memory
//! repositories that hold all of it for the lifetime of the process.

pub mod auth;
pub mod company;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod finance;
pub mod id;
pub mod marketplace;
pub mod need;
pub mod partner;
pub mod repository;
pub mod seed;
pub mod serde_helpers;
pub mod store;

pub use error::{CoreError, Result};
pub use id::IdGenerator;
pub use need::{BusinessNeed, NeedDraft, NeedType, Visibility};
pub use repository::{
    CompanyRepository, InMemoryCompany, InMemoryNeeds, InMemoryStore, NeedRepository,
    StoreRepository,
};
pub use seed::Catalog;
pub use store::{Product, ProductDraft, StoreProfile};
