//! Application state management

use domain_catalog::InMemoryCatalogRepository;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub repository: InMemoryCatalogRepository,
}

impl AppState {
    /// Seeds a fresh catalog; every start yields the same items.
    pub fn new(config: Config) -> Self {
        let repository = InMemoryCatalogRepository::seeded(config.catalog.seed_size);
        Self { config, repository }
    }
}
