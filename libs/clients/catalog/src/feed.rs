//! Infinite-scroll feed state.
//!
//! `FeedState` owns everything the browse view shows and decides when a
//! page request may go out. It does no I/O: the driver asks for the next
//! [`FetchRequest`], performs it, and hands the outcome back through
//! [`FeedState::complete`] together with the request's generation.
//!
//! Each change of the effective query or sort bumps the generation. A
//! response whose generation no longer matches is dropped, so a slow reply
//! for an old search never lands in the list of a newer one.

use std::fmt;

use domain_catalog::{Item, ListQuery, PageResult, SortOrder};
use tracing::{debug, warn};

use crate::error::ClientError;

/// Items requested per page, also the offset step when scrolling.
pub const PAGE_SIZE: usize = 20;

/// Message shown when a page fails to load.
pub const FETCH_FAILED: &str = "Failed to fetch items";

/// A page request tagged with the generation that issued it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub query: ListQuery,
}

/// Status line under the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer {
    Loading,
    Error(String),
    EndOfResults,
    Idle,
}

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Footer::Loading => f.write_str("Loading..."),
            Footer::Error(msg) => write!(f, "Error: {msg}"),
            Footer::EndOfResults => f.write_str("End of results."),
            Footer::Idle => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    query: String,
    debounced_query: String,
    sort: SortOrder,
    offset: usize,
    items: Vec<Item>,
    total: Option<usize>,
    has_more: bool,
    loading: bool,
    error: Option<String>,
    generation: u64,
    /// Set when the current offset still has to be requested
    fetch_pending: bool,
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            debounced_query: String::new(),
            sort: SortOrder::None,
            offset: 0,
            items: Vec::new(),
            total: None,
            has_more: true,
            loading: false,
            error: None,
            generation: 0,
            fetch_pending: true,
        }
    }

    /// Raw search input; takes effect once debounced through [`apply_query`].
    ///
    /// [`apply_query`]: FeedState::apply_query
    pub fn edit_query(&mut self, raw: impl Into<String>) {
        self.query = raw.into();
    }

    /// Debounced search input. Returns `true` when it changed the query and
    /// restarted the feed.
    pub fn apply_query(&mut self, debounced: impl Into<String>) -> bool {
        let debounced = debounced.into();
        if debounced == self.debounced_query {
            return false;
        }
        self.debounced_query = debounced;
        self.reset();
        true
    }

    /// Returns `true` when the sort changed and the feed restarted.
    pub fn set_sort(&mut self, sort: SortOrder) -> bool {
        if sort == self.sort {
            return false;
        }
        self.sort = sort;
        self.reset();
        true
    }

    /// Back to an empty first page for the current query and sort.
    ///
    /// Whatever is in flight belongs to the previous generation and will be
    /// ignored when it arrives.
    pub fn reset(&mut self) {
        self.items.clear();
        self.total = None;
        self.offset = 0;
        self.has_more = true;
        self.loading = false;
        self.error = None;
        self.generation += 1;
        self.fetch_pending = true;
        debug!(generation = self.generation, q = %self.debounced_query, sort = %self.sort, "Feed reset");
    }

    /// The request to issue now, if any. Marks the feed as loading.
    ///
    /// Each offset is requested once; the next request waits for a reset or
    /// for the sentinel to advance the offset.
    pub fn next_fetch(&mut self) -> Option<FetchRequest> {
        if !self.fetch_pending || self.loading || !self.has_more || self.error.is_some() {
            return None;
        }

        self.fetch_pending = false;
        self.loading = true;
        self.error = None;

        Some(FetchRequest {
            generation: self.generation,
            query: ListQuery::new(
                self.debounced_query.clone(),
                self.offset,
                PAGE_SIZE,
                self.sort,
            ),
        })
    }

    /// Apply the outcome of a request. Returns `false` if it was stale.
    pub fn complete(&mut self, generation: u64, result: Result<PageResult, ClientError>) -> bool {
        if generation != self.generation {
            debug!(
                stale = generation,
                current = self.generation,
                "Discarding superseded response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.items.extend(page.items);
                self.total = Some(page.total);
                self.has_more = page.has_more;
            }
            Err(e) => {
                warn!(error = %e, "Page request failed");
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
        true
    }

    /// The end-of-list sentinel came into view. Returns `true` when that
    /// advanced the offset to the next page.
    pub fn on_sentinel_visible(&mut self) -> bool {
        if !self.has_more || self.loading || self.error.is_some() {
            return false;
        }
        self.offset += PAGE_SIZE;
        self.fetch_pending = true;
        true
    }

    /// A new item was accepted by the server. Clears the search and the
    /// sort so the first page, which now starts with that item, is fetched
    /// again.
    pub fn item_created(&mut self) {
        self.query.clear();
        self.debounced_query.clear();
        self.sort = SortOrder::None;
        self.reset();
    }

    pub fn footer(&self) -> Footer {
        if self.loading {
            Footer::Loading
        } else if let Some(msg) = &self.error {
            Footer::Error(msg.clone())
        } else if !self.has_more {
            Footer::EndOfResults
        } else {
            Footer::Idle
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Matching item count from the latest page, if one has arrived
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}
