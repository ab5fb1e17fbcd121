use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CatalogResult;
use crate::models::{CreateItem, Item, ListQuery, PageResult};
use crate::pagination::paginate;
use crate::query::{filter_items, sort_by_price};
use crate::seed::{Lcg, generate};

/// Repository trait for catalog access
///
/// The catalog is an ordered sequence; new items go to the front.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Filter, sort and slice the catalog
    async fn list(&self, query: ListQuery) -> CatalogResult<PageResult>;

    /// Get an item by ID
    async fn get_by_id(&self, id: &str) -> CatalogResult<Option<Item>>;

    /// Assign the next id and prepend the item
    async fn insert_front(&self, input: CreateItem) -> CatalogResult<Item>;

    /// Number of items in the catalog
    async fn count(&self) -> CatalogResult<usize>;
}

struct CatalogState {
    items: VecDeque<Item>,
    next_id: u64,
}

/// In-memory catalog guarded by a single lock.
///
/// Listing holds the read lock for the whole filter/sort/slice pass and
/// creation holds the write lock while it assigns the id and prepends, so a
/// reader never sees a half-applied insert.
#[derive(Clone)]
pub struct InMemoryCatalogRepository {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryCatalogRepository {
    /// Wraps an initial catalog; ids continue from `items.len() + 1`.
    pub fn new(items: Vec<Item>) -> Self {
        let next_id = items.len() as u64 + 1;
        Self {
            state: Arc::new(RwLock::new(CatalogState {
                items: items.into(),
                next_id,
            })),
        }
    }

    /// Catalog of `count` generated items using the default seed.
    pub fn seeded(count: usize) -> Self {
        let mut rng = Lcg::default();
        Self::new(generate(count, &mut rng))
    }
}

impl Default for InMemoryCatalogRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list(&self, query: ListQuery) -> CatalogResult<PageResult> {
        let state = self.state.read().await;

        let mut matched = filter_items(&state.items, &query.q);
        sort_by_price(&mut matched, query.sort);

        Ok(paginate(&matched, query.offset, query.limit))
    }

    async fn get_by_id(&self, id: &str) -> CatalogResult<Option<Item>> {
        let state = self.state.read().await;
        Ok(state.items.iter().find(|item| item.id == id).cloned())
    }

    async fn insert_front(&self, input: CreateItem) -> CatalogResult<Item> {
        let mut state = self.state.write().await;

        let id = state.next_id.to_string();
        state.next_id += 1;

        let item = Item::from_create(id, input);
        state.items.push_front(item.clone());

        tracing::info!(item_id = %item.id, "Created item");
        Ok(item)
    }

    async fn count(&self) -> CatalogResult<usize> {
        Ok(self.state.read().await.items.len())
    }
}
