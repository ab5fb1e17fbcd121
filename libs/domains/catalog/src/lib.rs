//! Catalog Domain
//!
//! In-memory product catalog with substring search, price sorting and
//! offset pagination.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/items, /items/{id})
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, tracing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Ordered in-memory store (trait + implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────────────────────┐
//! │ Query · Pagination · Seed   │  ← Filter/sort, page slicing, dataset
//! └─────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{handlers, CatalogService, InMemoryCatalogRepository};
//!
//! let repository = InMemoryCatalogRepository::seeded(600);
//! let service = CatalogService::new(repository);
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod seed;
pub mod service;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{CreateItem, DEFAULT_LIMIT, Item, ListParams, ListQuery, MAX_LIMIT, PageResult, SortOrder};
pub use repository::{CatalogRepository, InMemoryCatalogRepository};
pub use service::CatalogService;
