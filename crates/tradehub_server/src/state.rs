//! Application state

use std::sync::Arc;
use std::time::Instant;

use tradehub_core::{
    Catalog, CompanyRepository, IdGenerator, InMemoryCompany, InMemoryNeeds, InMemoryStore,
    NeedRepository, StoreRepository,
};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub catalog: Arc<Catalog>,
    pub needs: Arc<dyn NeedRepository>,
    pub store: Arc<dyn StoreRepository>,
    pub company: Arc<dyn CompanyRepository>,
    pub started_at: Instant,
}

impl AppState {
    /// Fresh state seeded with the demo data.
    pub fn new(config: ServerConfig) -> Self {
        let ids = Arc::new(IdGenerator::new());

        Self {
            config,
            catalog: Arc::new(Catalog::default()),
            needs: Arc::new(InMemoryNeeds::seeded(Arc::clone(&ids))),
            store: Arc::new(InMemoryStore::seeded(ids)),
            company: Arc::new(InMemoryCompany::default()),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
