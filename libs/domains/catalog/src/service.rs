//! Catalog Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CreateItem, Item, ListQuery, PageResult};
use crate::repository::CatalogRepository;

/// Catalog service providing business logic operations
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// One page of the catalog matching `query`
    #[instrument(skip(self), fields(q = %query.q, offset = query.offset, limit = query.limit, sort = %query.sort))]
    pub async fn list_items(&self, query: ListQuery) -> CatalogResult<PageResult> {
        let page = self.repository.list(query).await?;
        tracing::debug!(total = page.total, returned = page.items.len(), "Listed items");
        Ok(page)
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: &str) -> CatalogResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Create a new item at the front of the catalog
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> CatalogResult<Item> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        if !input.price.is_finite() {
            return Err(CatalogError::Validation("price must be a finite number".into()));
        }

        self.repository.insert_front(input).await
    }

    /// Number of items in the catalog
    #[instrument(skip(self))]
    pub async fn count_items(&self) -> CatalogResult<usize> {
        self.repository.count().await
    }
}

impl<R: CatalogRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
