//! Configuration for the Catalog API

use core_config::{
    app_info, env_or_default, env_parse_or, server::ServerConfig, AppInfo, ConfigError, FromEnv,
};
use domain_catalog::seed::DEFAULT_SEED_SIZE;

pub use core_config::Environment;

/// Origin of the web client during local development.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Catalog-specific settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Number of generated items loaded at startup (`CATALOG_SEED_SIZE`)
    pub seed_size: usize,
    /// Comma-separated CORS origins (`CORS_ALLOWED_ORIGIN`)
    pub allowed_origins: String,
}

impl FromEnv for CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            seed_size: env_parse_or("CATALOG_SEED_SIZE", DEFAULT_SEED_SIZE)?,
            allowed_origins: env_or_default("CORS_ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN),
        })
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            catalog: CatalogConfig::from_env()?,
        })
    }
}
