//! In-memory repositories
//!
//! State lives for the lifetime of the process and starts from [`crate::seed`].
//! Every write takes the repository's lock, so concurrent requests never
//! interleave a read-modify-write.

use chrono::NaiveDate;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::company::CompanyProfile;
use crate::error::{CoreError, Result};
use crate::id::IdGenerator;
use crate::need::{BusinessNeed, NeedDraft, NeedStatus};
use crate::seed;
use crate::serde_helpers::merge_shallow;
use crate::store::{Product, ProductDraft, StoreProfile};

pub trait NeedRepository: Send + Sync {
    /// All postings in insertion order.
    fn list(&self) -> Vec<BusinessNeed>;

    /// Store a new posting built from `draft`, created on `today`.
    fn create(&self, draft: NeedDraft, today: NaiveDate) -> Result<BusinessNeed>;

    fn count_open(&self) -> usize;
}

pub trait StoreRepository: Send + Sync {
    fn profile(&self) -> StoreProfile;

    /// Shallow-merge `patch` onto the profile.
    fn update_profile(&self, patch: serde_json::Value) -> Result<StoreProfile>;

    fn products(&self) -> Vec<Product>;

    fn add_product(&self, draft: ProductDraft) -> Product;

    /// Shallow-merge `patch` onto the product with `id`. The stored id and
    /// view count are kept.
    fn update_product(&self, id: i64, patch: serde_json::Value) -> Result<Product>;

    /// Remove the product with `id`. Returns whether anything was removed.
    fn remove_product(&self, id: i64) -> bool;
}

pub trait CompanyRepository: Send + Sync {
    fn company(&self) -> CompanyProfile;

    fn replace_company(&self, profile: CompanyProfile) -> CompanyProfile;
}

/// Posting registry.
#[derive(Debug)]
pub struct InMemoryNeeds {
    needs: RwLock<Vec<BusinessNeed>>,
    ids: Arc<IdGenerator>,
}

impl InMemoryNeeds {
    pub fn new(needs: Vec<BusinessNeed>, ids: Arc<IdGenerator>) -> Self {
        Self {
            needs: RwLock::new(needs),
            ids,
        }
    }

    pub fn seeded(ids: Arc<IdGenerator>) -> Self {
        Self::new(seed::business_needs(), ids)
    }
}

impl NeedRepository for InMemoryNeeds {
    fn list(&self) -> Vec<BusinessNeed> {
        self.needs.read().clone()
    }

    fn create(&self, draft: NeedDraft, today: NaiveDate) -> Result<BusinessNeed> {
        let need = draft.into_need(self.ids.next_id(), today)?;
        self.needs.write().push(need.clone());
        tracing::info!(id = need.id, product = %need.product, "posted business need");
        Ok(need)
    }

    fn count_open(&self) -> usize {
        self.needs
            .read()
            .iter()
            .filter(|need| need.status == NeedStatus::Open)
            .count()
    }
}

/// Storefront profile. The profile's product list is the one the product
/// operations edit.
#[derive(Debug)]
pub struct InMemoryStore {
    profile: RwLock<StoreProfile>,
    ids: Arc<IdGenerator>,
}

impl InMemoryStore {
    pub fn new(profile: StoreProfile, ids: Arc<IdGenerator>) -> Self {
        Self {
            profile: RwLock::new(profile),
            ids,
        }
    }

    pub fn seeded(ids: Arc<IdGenerator>) -> Self {
        Self::new(seed::store_profile(), ids)
    }
}

impl StoreRepository for InMemoryStore {
    fn profile(&self) -> StoreProfile {
        self.profile.read().clone()
    }

    fn update_profile(&self, patch: serde_json::Value) -> Result<StoreProfile> {
        let mut profile = self.profile.write();
        let merged = merge_shallow("store", &*profile, patch)?;
        *profile = merged.clone();
        tracing::info!(company = %merged.company_name, "updated store profile");
        Ok(merged)
    }

    fn products(&self) -> Vec<Product> {
        self.profile.read().products.clone()
    }

    fn add_product(&self, draft: ProductDraft) -> Product {
        let product = draft.into_product(self.ids.next_id());
        self.profile.write().products.push(product.clone());
        tracing::info!(id = product.id, name = %product.name, "added store product");
        product
    }

    fn update_product(&self, id: i64, mut patch: serde_json::Value) -> Result<Product> {
        // The stored identity wins over whatever form the body carried it in
        if let Some(fields) = patch.as_object_mut() {
            fields.remove("id");
            fields.remove("views");
        }

        let mut profile = self.profile.write();
        let slot = profile
            .products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(CoreError::ProductNotFound { id })?;

        let merged = merge_shallow("product", &*slot, patch)?;
        *slot = merged.clone();
        tracing::info!(id, "updated store product");
        Ok(merged)
    }

    fn remove_product(&self, id: i64) -> bool {
        let mut profile = self.profile.write();
        let before = profile.products.len();
        profile.products.retain(|product| product.id != id);
        let removed = profile.products.len() != before;
        tracing::info!(id, removed, "deleted store product");
        removed
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCompany {
    profile: RwLock<CompanyProfile>,
}

impl CompanyRepository for InMemoryCompany {
    fn company(&self) -> CompanyProfile {
        self.profile.read().clone()
    }

    fn replace_company(&self, profile: CompanyProfile) -> CompanyProfile {
        *self.profile.write() = profile.clone();
        tracing::info!(name = %profile.name, "updated company profile");
        profile
    }
}
